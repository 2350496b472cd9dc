pub mod filename;
pub mod oss_config;
pub mod upload;

pub use oss_config::{AliyunOssConfig, AliyunProperty, OssConnection};
pub use upload::{UploadFile, UploadResult};
