use std::{io::Cursor, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::{
    domain::{
        errors::{FileOperationError, FileResult, ValidationError},
        models::{
            AliyunOssConfig, AliyunProperty, OssConnection, UploadFile, UploadResult, filename,
        },
        value_objects::{AttachmentType, MediaType, ObjectKey},
    },
    ports::{
        config::OptionSource,
        handlers::FileHandler,
        storage::{OssSessionFactory, SessionGuard},
    },
};

/// File handler storing attachments in an Aliyun OSS bucket
///
/// Options are read from the option source on every call and a new session
/// is opened per call, so handlers can be shared freely across tasks.
#[derive(Clone)]
pub struct AliyunFileHandler {
    options: Arc<dyn OptionSource>,
    sessions: Arc<dyn OssSessionFactory>,
}

impl AliyunFileHandler {
    pub fn new(options: Arc<dyn OptionSource>, sessions: Arc<dyn OssSessionFactory>) -> Self {
        Self { options, sessions }
    }

    /// Upload like [`FileHandler::upload`], but report every failure.
    ///
    /// `upload` logs storage, media type and image decoding failures and
    /// returns an empty [`UploadResult`] in their place. Callers that need to
    /// tell a failed upload from a successful one should use this instead.
    pub async fn try_upload(&self, file: UploadFile) -> FileResult<UploadResult> {
        let config = self.load_config()?;
        let session = self.open_session(&config.connection)?;

        let result = self.store(&session, &config, &file).await?;

        info!("File: [{}] uploaded successfully", file.original_filename);
        Ok(result)
    }

    fn load_config(&self) -> FileResult<AliyunOssConfig> {
        let values = self.options.get_many(&AliyunProperty::keys())?;
        Ok(AliyunOssConfig::from_lookup(|key| Ok(values.get(key).cloned()))?)
    }

    fn open_session(&self, connection: &OssConnection) -> FileResult<SessionGuard> {
        let session = self
            .sessions
            .open(connection)
            .map_err(FileOperationError::Session)?;
        Ok(SessionGuard::new(session))
    }

    async fn store(
        &self,
        session: &SessionGuard,
        config: &AliyunOssConfig,
        file: &UploadFile,
    ) -> FileResult<UploadResult> {
        let original_filename = file.original_filename.as_str();
        let invalid_file = |reason: ValidationError| FileOperationError::InvalidFile {
            filename: original_filename.to_string(),
            reason,
        };

        if original_filename.trim().is_empty() {
            return Err(invalid_file(ValidationError::EmptyFilename));
        }

        let basename = filename::basename(original_filename);
        let extension = filename::extension(original_filename);
        let timestamp = Utc::now().timestamp_millis();
        let up_file_path = format!("{}_{}.{}", basename, timestamp, extension);
        let file_path = config.public_path(&up_file_path);
        let key = ObjectKey::new(up_file_path).map_err(invalid_file)?;

        let receipt = session
            .put_object(&key, file.data.clone(), file.content_type.as_deref())
            .await
            .map_err(|source| FileOperationError::UploadFailed {
                filename: original_filename.to_string(),
                source,
            })?;
        if receipt.is_none() {
            return Err(FileOperationError::UploadRejected {
                filename: original_filename.to_string(),
            });
        }

        let media_type = file
            .content_type
            .as_deref()
            .ok_or_else(|| FileOperationError::MissingContentType {
                filename: original_filename.to_string(),
            })
            .and_then(|ct| MediaType::parse(ct).map_err(invalid_file))?;

        let (dimensions, thumb_path) = if media_type.is_image() {
            let dimensions = image_dimensions(&file.data).map_err(|source| {
                FileOperationError::ImageDecode {
                    filename: original_filename.to_string(),
                    source,
                }
            })?;
            (
                Some(dimensions),
                Some(with_style_rule(&file_path, &config.thumbnail_style_rule)),
            )
        } else {
            (None, None)
        };

        Ok(UploadResult::builder()
            .filename(basename.to_string())
            .file_path(with_style_rule(&file_path, &config.style_rule))
            .key(key.as_str().to_string())
            .media_type(media_type)
            .suffix(extension.to_string())
            .size(file.size)
            .maybe_width(dimensions.map(|(width, _)| width))
            .maybe_height(dimensions.map(|(_, height)| height))
            .maybe_thumb_path(thumb_path)
            .build())
    }
}

fn with_style_rule(file_path: &str, style_rule: &str) -> String {
    if style_rule.trim().is_empty() {
        file_path.to_string()
    } else {
        format!("{}{}", file_path, style_rule)
    }
}

fn image_dimensions(data: &[u8]) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .into_dimensions()
}

#[async_trait]
impl FileHandler for AliyunFileHandler {
    async fn upload(&self, file: UploadFile) -> FileResult<UploadResult> {
        let config = self.load_config()?;
        let session = self.open_session(&config.connection)?;

        let outcome = self.store(&session, &config, &file).await;
        drop(session);

        // Failures after the session is open only reach the log; the caller
        // gets an empty result. See `try_upload` for the reporting variant.
        let result = outcome.unwrap_or_else(|err| {
            error!(
                filename = %file.original_filename,
                error = %err,
                "Failed to upload attachment to Aliyun OSS"
            );
            UploadResult::default()
        });

        info!("File: [{}] uploaded successfully", file.original_filename);
        Ok(result)
    }

    async fn delete(&self, key: &str) -> FileResult<()> {
        let object_key = ObjectKey::new(key).map_err(FileOperationError::InvalidKey)?;

        let config = self.load_config()?;
        let session = self.open_session(&config.connection)?;

        session
            .delete_object(&object_key)
            .await
            .map_err(|source| FileOperationError::DeleteFailed {
                key: key.to_string(),
                source,
            })?;

        info!("File: [{}] deleted from Aliyun OSS", key);
        Ok(())
    }

    fn support_type(&self, attachment_type: AttachmentType) -> bool {
        attachment_type == AttachmentType::AliOss
    }
}
