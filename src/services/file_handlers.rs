use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{
        errors::{FileOperationError, FileResult},
        models::{UploadFile, UploadResult},
        value_objects::AttachmentType,
    },
    ports::handlers::FileHandler,
};

/// Registry selecting a file handler by attachment type
#[derive(Clone, Default)]
pub struct FileHandlers {
    handlers: Vec<Arc<dyn FileHandler>>,
}

impl FileHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler; earlier registrations win when several support a type
    pub fn register(&mut self, handler: Arc<dyn FileHandler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    pub fn with_handler(mut self, handler: Arc<dyn FileHandler>) -> Self {
        self.register(handler);
        self
    }

    /// The handler serving `attachment_type`
    pub fn handler_for(&self, attachment_type: AttachmentType) -> FileResult<&Arc<dyn FileHandler>> {
        self.handlers
            .iter()
            .find(|handler| handler.support_type(attachment_type))
            .ok_or(FileOperationError::NoHandler(attachment_type))
    }

    /// Attachment types served by at least one registered handler
    pub fn supported_types(&self) -> Vec<AttachmentType> {
        AttachmentType::ALL
            .into_iter()
            .filter(|t| self.handler_for(*t).is_ok())
            .collect()
    }

    pub async fn upload(
        &self,
        file: UploadFile,
        attachment_type: AttachmentType,
    ) -> FileResult<UploadResult> {
        debug!(
            filename = %file.original_filename,
            attachment_type = %attachment_type,
            "Dispatching upload"
        );
        self.handler_for(attachment_type)?.upload(file).await
    }

    pub async fn delete(&self, key: &str, attachment_type: AttachmentType) -> FileResult<()> {
        debug!(key, attachment_type = %attachment_type, "Dispatching delete");
        self.handler_for(attachment_type)?.delete(key).await
    }
}
