use async_trait::async_trait;

use crate::domain::{
    errors::FileResult,
    models::{UploadFile, UploadResult},
    value_objects::AttachmentType,
};

/// Port implemented by every attachment storage backend
#[async_trait]
pub trait FileHandler: Send + Sync + 'static {
    /// Store a file and describe where it ended up
    async fn upload(&self, file: UploadFile) -> FileResult<UploadResult>;

    /// Remove the object stored under `key`
    async fn delete(&self, key: &str) -> FileResult<()>;

    /// Whether this handler serves attachments of the given type
    fn support_type(&self, attachment_type: AttachmentType) -> bool;
}
