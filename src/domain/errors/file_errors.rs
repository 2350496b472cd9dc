use thiserror::Error;

use super::{ConfigError, StorageError, ValidationError};
use crate::domain::value_objects::AttachmentType;

/// Errors surfaced by file handlers to their callers
#[derive(Debug, Error)]
pub enum FileOperationError {
    #[error("Invalid handler configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid file key: {0}")]
    InvalidKey(ValidationError),

    #[error("Invalid upload for {filename}: {reason}")]
    InvalidFile {
        filename: String,
        reason: ValidationError,
    },

    #[error("Attachment {filename} has no content type")]
    MissingContentType { filename: String },

    #[error("Uploading attachment {filename} to Aliyun OSS returned no result")]
    UploadRejected { filename: String },

    #[error("Failed to upload attachment {filename} to Aliyun OSS: {source}")]
    UploadFailed {
        filename: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to read image dimensions of {filename}: {source}")]
    ImageDecode {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to delete attachment {key} from Aliyun OSS: {source}")]
    DeleteFailed {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to open storage session: {0}")]
    Session(StorageError),

    #[error("No available file handler for attachment type {0}")]
    NoHandler(AttachmentType),
}

/// Result type for file handler operations
pub type FileResult<T> = Result<T, FileOperationError>;
