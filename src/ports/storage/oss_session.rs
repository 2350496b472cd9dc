use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    errors::StorageResult,
    models::OssConnection,
    value_objects::ObjectKey,
};

/// Acknowledgement returned by a successful put
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutReceipt {
    pub etag: Option<String>,
    pub version: Option<String>,
}

/// Port for a client session bound to one bucket
///
/// A session is opened per handler call and shut down when the call ends.
#[async_trait]
pub trait OssSession: Send + Sync {
    /// Store `data` under `key`.
    ///
    /// `Ok(None)` means the backend accepted the request but reported no result.
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<Option<PutReceipt>>;

    /// Delete the object stored under `key`
    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()>;

    /// Release the session's resources; later calls fail
    fn shutdown(&mut self);
}

/// Port for opening storage sessions
pub trait OssSessionFactory: Send + Sync + 'static {
    fn open(&self, connection: &OssConnection) -> StorageResult<Box<dyn OssSession>>;
}

/// Owns an open session and shuts it down exactly once when dropped
pub struct SessionGuard {
    session: Box<dyn OssSession>,
}

impl SessionGuard {
    pub fn new(session: Box<dyn OssSession>) -> Self {
        Self { session }
    }
}

impl std::ops::Deref for SessionGuard {
    type Target = dyn OssSession;

    fn deref(&self) -> &Self::Target {
        self.session.as_ref()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.session.shutdown();
    }
}
