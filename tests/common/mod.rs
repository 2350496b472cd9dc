#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use bytes::Bytes;
use oss_attachments::{
    ObjectKey, OptionSource, OssConnection, OssSession, OssSessionFactory, PutReceipt,
    StaticOptions, StorageError,
    domain::errors::{ConfigResult, StorageResult},
};

pub const ENDPOINT: &str = "oss-cn-hangzhou.aliyuncs.com";
pub const BUCKET: &str = "halo-bucket";

/// Options with only the required properties set
pub fn required_options() -> StaticOptions {
    StaticOptions::new()
        .with("oss_ali_endpoint", ENDPOINT)
        .with("oss_ali_access_key", "LTAI-test")
        .with("oss_ali_access_secret", "secret")
        .with("oss_ali_bucket_name", BUCKET)
}

/// A PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Bytes {
    let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    Bytes::from(buffer.into_inner())
}

/// Option source that counts single and batched lookups
#[derive(Debug, Clone, Default)]
pub struct CountingOptions {
    inner: StaticOptions,
    gets: Arc<AtomicUsize>,
    batches: Arc<AtomicUsize>,
}

impl CountingOptions {
    pub fn new(inner: StaticOptions) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }
}

impl OptionSource for CountingOptions {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn get_many(&self, keys: &[&'static str]) -> ConfigResult<HashMap<&'static str, String>> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.inner.get_many(keys)
    }
}

/// Split `{basename}_{millis}.{extension}` into its parts
pub fn parse_key(key: &str) -> (String, i64, String) {
    let (stem, extension) = key.rsplit_once('.').unwrap();
    let (basename, timestamp) = stem.rsplit_once('_').unwrap();
    (
        basename.to_string(),
        timestamp.parse().unwrap(),
        extension.to_string(),
    )
}

/// How scripted sessions answer
#[derive(Debug, Clone)]
pub enum Script {
    /// Put returns no result
    NoResult,
    /// Every call fails with this error
    Fail(StorageError),
}

/// Session factory whose sessions follow a script and count shutdowns
#[derive(Clone)]
pub struct ScriptedSessionFactory {
    script: Script,
    pub opened: Arc<AtomicUsize>,
    pub shut_down: Arc<AtomicUsize>,
}

impl ScriptedSessionFactory {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            opened: Arc::new(AtomicUsize::new(0)),
            shut_down: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn shut_down(&self) -> usize {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl OssSessionFactory for ScriptedSessionFactory {
    fn open(&self, _connection: &OssConnection) -> StorageResult<Box<dyn OssSession>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession {
            script: self.script.clone(),
            shut_down: self.shut_down.clone(),
        }))
    }
}

struct ScriptedSession {
    script: Script,
    shut_down: Arc<AtomicUsize>,
}

#[async_trait]
impl OssSession for ScriptedSession {
    async fn put_object(
        &self,
        _key: &ObjectKey,
        _data: Bytes,
        _content_type: Option<&str>,
    ) -> StorageResult<Option<PutReceipt>> {
        match &self.script {
            Script::NoResult => Ok(None),
            Script::Fail(err) => Err(err.clone()),
        }
    }

    async fn delete_object(&self, _key: &ObjectKey) -> StorageResult<()> {
        match &self.script {
            Script::NoResult => Ok(()),
            Script::Fail(err) => Err(err.clone()),
        }
    }

    fn shutdown(&mut self) {
        self.shut_down.fetch_add(1, Ordering::SeqCst);
    }
}
