use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use object_store::memory::InMemory;

use super::object_store_session::ObjectStoreSession;
use crate::{
    domain::{errors::StorageResult, models::OssConnection},
    ports::storage::{OssSession, OssSessionFactory},
};

/// Session factory over a process-local `InMemory` store
///
/// All sessions opened by one factory (and its clones) see the same objects,
/// regardless of the connection they were opened with.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionFactory {
    store: Arc<InMemory>,
    live_sessions: Arc<AtomicUsize>,
    opened_sessions: Arc<AtomicUsize>,
}

impl InMemorySessionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The backing store, for inspecting what was written
    pub fn store(&self) -> Arc<InMemory> {
        self.store.clone()
    }

    /// Sessions opened and not yet shut down
    pub fn live_sessions(&self) -> usize {
        self.live_sessions.load(Ordering::SeqCst)
    }

    /// Sessions opened since the factory was created
    pub fn opened_sessions(&self) -> usize {
        self.opened_sessions.load(Ordering::SeqCst)
    }
}

impl OssSessionFactory for InMemorySessionFactory {
    fn open(&self, _connection: &OssConnection) -> StorageResult<Box<dyn OssSession>> {
        self.opened_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ObjectStoreSession::tracked(
            self.store.clone(),
            self.live_sessions.clone(),
        )))
    }
}
