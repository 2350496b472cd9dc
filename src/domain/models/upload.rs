use std::path::Path;

use bon::Builder;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MediaType;

/// A file payload handed to a file handler
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub original_filename: String,
    pub content_type: Option<String>,
    pub size: u64,
    pub data: Bytes,
}

impl UploadFile {
    pub fn new(
        original_filename: impl Into<String>,
        content_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let data = data.into();
        Self {
            original_filename: original_filename.into(),
            content_type,
            size: data.len() as u64,
            data,
        }
    }

    /// Read a local file into memory
    pub async fn from_path(
        path: impl AsRef<Path>,
        content_type: Option<String>,
    ) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let original_filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(original_filename, content_type, data))
    }
}

/// Normalized outcome of an upload
///
/// Every field is optional so that an unpopulated result can be returned
/// when the upload is swallowed by [`FileHandler::upload`](crate::ports::FileHandler::upload).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    filename: Option<String>,
    file_path: Option<String>,
    key: Option<String>,
    thumb_path: Option<String>,
    suffix: Option<String>,
    media_type: Option<MediaType>,
    size: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
}

impl UploadResult {
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Public URL of the stored object, style rule included
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn thumb_path(&self) -> Option<&str> {
        self.thumb_path.as_deref()
    }

    /// File extension without the dot
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn media_type(&self) -> Option<&MediaType> {
        self.media_type.as_ref()
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// True when nothing was populated
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
