//! Aliyun OSS session factory using the object_store crate
//!
//! OSS exposes an S3-compatible API, so sessions are built on object_store's
//! Amazon S3 client in virtual-hosted style against `{bucket}.{endpoint}`.

use std::sync::Arc;

use object_store::{ObjectStore as ObjectStoreBackend, aws::AmazonS3Builder};
use tracing::debug;

use super::object_store_session::ObjectStoreSession;
use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::OssConnection,
    },
    ports::storage::{OssSession, OssSessionFactory},
};

/// Opens a fresh OSS client for every session
#[derive(Debug, Clone, Default)]
pub struct AliyunSessionFactory;

impl AliyunSessionFactory {
    pub fn new() -> Self {
        Self
    }
}

impl OssSessionFactory for AliyunSessionFactory {
    fn open(&self, connection: &OssConnection) -> StorageResult<Box<dyn OssSession>> {
        let store = create_oss_store(connection)?;
        Ok(Box::new(ObjectStoreSession::new(store)))
    }
}

/// Endpoint host with any scheme and trailing slash removed
fn endpoint_host(endpoint: &str) -> &str {
    let host = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint);
    host.trim_end_matches('/')
}

/// Region id used for request signing, e.g. `oss-cn-hangzhou`
pub fn region_from_endpoint(endpoint: &str) -> String {
    let host = endpoint_host(endpoint);
    let region = host.split('.').next().unwrap_or(host);
    region.trim_end_matches("-internal").to_string()
}

/// Build an OSS-backed store from a connection
pub fn create_oss_store(connection: &OssConnection) -> StorageResult<Arc<dyn ObjectStoreBackend>> {
    let host = endpoint_host(&connection.endpoint);
    let bucket_endpoint = format!("{}{}.{}", connection.protocol, connection.bucket, host);
    let region = region_from_endpoint(host);

    debug!(
        endpoint = %bucket_endpoint,
        region = %region,
        "Opening Aliyun OSS session"
    );

    let store = AmazonS3Builder::new()
        .with_bucket_name(connection.bucket.as_str())
        .with_region(region)
        .with_endpoint(bucket_endpoint)
        .with_virtual_hosted_style_request(true)
        .with_allow_http(connection.protocol.starts_with("http://"))
        .with_access_key_id(&connection.access_key)
        .with_secret_access_key(&connection.access_secret)
        .build()
        .map_err(|e| StorageError::InfrastructureError {
            message: format!("Failed to build OSS client: {}", e),
            source: Some(e.to_string()),
        })?;

    Ok(Arc::new(store))
}
