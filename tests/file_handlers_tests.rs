mod common;

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use common::required_options;
use oss_attachments::{
    AppBuilder, AttachmentType, FileHandler, FileHandlers, FileOperationError,
    InMemorySessionFactory, OptionsBackend, StorageBackend, UploadFile, UploadResult,
    create_in_memory_app, domain::errors::FileResult,
};

/// Handler for local attachments that records nothing
struct LocalHandler;

#[async_trait]
impl FileHandler for LocalHandler {
    async fn upload(&self, file: UploadFile) -> FileResult<UploadResult> {
        Ok(UploadResult::builder()
            .key(file.original_filename.clone())
            .file_path(format!("/upload/{}", file.original_filename))
            .build())
    }

    async fn delete(&self, _key: &str) -> FileResult<()> {
        Ok(())
    }

    fn support_type(&self, attachment_type: AttachmentType) -> bool {
        attachment_type == AttachmentType::Local
    }
}

fn text_file() -> UploadFile {
    UploadFile::new("notes.txt", Some("text/plain".to_string()), Bytes::from_static(b"hi"))
}

#[tokio::test]
async fn dispatches_by_attachment_type() {
    let app = create_in_memory_app(required_options()).unwrap();
    let handlers = app.file_handlers.with_handler(Arc::new(LocalHandler));

    let local = handlers
        .upload(text_file(), AttachmentType::Local)
        .await
        .unwrap();
    assert_eq!(local.file_path(), Some("/upload/notes.txt"));

    let aliyun = handlers
        .upload(text_file(), AttachmentType::AliOss)
        .await
        .unwrap();
    assert!(aliyun.file_path().unwrap().starts_with("https://halo-bucket."));

    handlers
        .delete(aliyun.key().unwrap(), AttachmentType::AliOss)
        .await
        .unwrap();

    assert_eq!(
        handlers.supported_types(),
        vec![AttachmentType::Local, AttachmentType::AliOss]
    );
}

#[tokio::test]
async fn reports_missing_handler() {
    let handlers = FileHandlers::new().with_handler(Arc::new(LocalHandler));

    let err = handlers
        .upload(text_file(), AttachmentType::MinIo)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FileOperationError::NoHandler(AttachmentType::MinIo)
    ));

    let err = handlers
        .delete("notes.txt", AttachmentType::AliOss)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FileOperationError::NoHandler(AttachmentType::AliOss)
    ));
}

#[tokio::test]
async fn builds_from_json_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("oss.json");
    std::fs::write(
        &path,
        r#"{
            "oss_ali_endpoint": "oss-cn-shanghai.aliyuncs.com",
            "oss_ali_access_key": "LTAI-test",
            "oss_ali_access_secret": "secret",
            "oss_ali_bucket_name": "json-bucket",
            "oss_ali_style_rule": "!w800"
        }"#,
    )
    .unwrap();

    let sessions = InMemorySessionFactory::new();
    let app = AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .with_options_backend(OptionsBackend::JsonFile { path })
        .with_session_factory(Arc::new(sessions.clone()))
        .build()
        .unwrap();

    let result = app
        .file_handlers
        .upload(text_file(), AttachmentType::AliOss)
        .await
        .unwrap();

    let key = result.key().unwrap();
    assert_eq!(
        result.file_path().unwrap(),
        format!("https://json-bucket.oss-cn-shanghai.aliyuncs.com/{}!w800", key)
    );
    assert_eq!(sessions.opened_sessions(), 1);
    assert_eq!(sessions.live_sessions(), 0);
}
