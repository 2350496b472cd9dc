use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    Attribute, Attributes, ObjectStore as ObjectStoreBackend, PutOptions, PutPayload,
    path::Path as ObjectPath,
};
use tracing::debug;

use super::error::storage_error;
use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::ObjectKey,
    },
    ports::storage::{OssSession, PutReceipt},
};

/// Session over an Apache `object_store` backend bound to one bucket
pub struct ObjectStoreSession {
    store: Option<Arc<dyn ObjectStoreBackend>>,
    live_sessions: Option<Arc<AtomicUsize>>,
}

impl ObjectStoreSession {
    pub fn new(store: Arc<dyn ObjectStoreBackend>) -> Self {
        Self {
            store: Some(store),
            live_sessions: None,
        }
    }

    /// Count this session in `counter` until it is shut down
    pub fn tracked(store: Arc<dyn ObjectStoreBackend>, counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self {
            store: Some(store),
            live_sessions: Some(counter),
        }
    }

    fn store(&self) -> StorageResult<&Arc<dyn ObjectStoreBackend>> {
        self.store.as_ref().ok_or(StorageError::SessionClosed)
    }

    /// The key verbatim as a store location; `Path::from` would percent-encode it
    fn to_object_path(key: &ObjectKey) -> StorageResult<ObjectPath> {
        ObjectPath::parse(key.as_str()).map_err(|e| StorageError::ValidationError {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl OssSession for ObjectStoreSession {
    async fn put_object(
        &self,
        key: &ObjectKey,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<Option<PutReceipt>> {
        let store = self.store()?;
        let path = Self::to_object_path(key)?;

        let mut attributes = Attributes::new();
        if let Some(ct) = content_type {
            attributes.insert(Attribute::ContentType, ct.to_string().into());
        }
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let size = data.len();
        let result = store
            .put_opts(&path, PutPayload::from(data), opts)
            .await
            .map_err(|e| storage_error(e, key))?;

        debug!(key = %key, size, etag = ?result.e_tag, "Stored object");

        Ok(Some(PutReceipt {
            etag: result.e_tag,
            version: result.version,
        }))
    }

    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()> {
        let store = self.store()?;
        let path = Self::to_object_path(key)?;

        store
            .delete(&path)
            .await
            .map_err(|e| storage_error(e, key))?;

        debug!(key = %key, "Deleted object");
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.store.take().is_some() {
            if let Some(counter) = self.live_sessions.take() {
                counter.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    #[tokio::test]
    async fn test_put_then_delete() {
        let backend = Arc::new(InMemory::new());
        let session = ObjectStoreSession::new(backend.clone());
        let key = ObjectKey::new("notes_1.txt").unwrap();

        let receipt = session
            .put_object(&key, Bytes::from_static(b"hello"), Some("text/plain"))
            .await
            .unwrap();
        assert!(receipt.is_some());

        let stored = backend
            .get(&ObjectPath::from("notes_1.txt"))
            .await
            .unwrap();
        assert_eq!(
            stored.attributes.get(&Attribute::ContentType).map(|v| &**v),
            Some("text/plain")
        );
        assert_eq!(stored.bytes().await.unwrap(), Bytes::from_static(b"hello"));

        session.delete_object(&key).await.unwrap();
        assert!(backend.head(&ObjectPath::from("notes_1.txt")).await.is_err());
    }

    #[tokio::test]
    async fn test_key_is_stored_verbatim() {
        let backend = Arc::new(InMemory::new());
        let session = ObjectStoreSession::new(backend.clone());
        let key = ObjectKey::new("report #1 [50%]_1.txt").unwrap();

        session
            .put_object(&key, Bytes::from_static(b"q3"), None)
            .await
            .unwrap();

        let location = ObjectPath::parse("report #1 [50%]_1.txt").unwrap();
        assert_eq!(location.as_ref(), "report #1 [50%]_1.txt");
        assert!(backend.head(&location).await.is_ok());
    }

    #[tokio::test]
    async fn test_relative_segment_is_rejected() {
        let session = ObjectStoreSession::new(Arc::new(InMemory::new()));
        let key = ObjectKey::new("docs/../secret.txt").unwrap();

        let err = session
            .put_object(&key, Bytes::from_static(b"x"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_shutdown_closes_session() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut session = ObjectStoreSession::tracked(Arc::new(InMemory::new()), counter.clone());
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        session.shutdown();
        session.shutdown();
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        let key = ObjectKey::new("late.txt").unwrap();
        let err = session.delete_object(&key).await.unwrap_err();
        assert!(matches!(err, StorageError::SessionClosed));
    }
}
