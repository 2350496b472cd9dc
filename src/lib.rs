pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    AliyunOssConfig,
    AliyunProperty,
    // Value objects
    AttachmentType,
    BucketName,
    // Errors
    ConfigError,
    FileOperationError,
    MediaType,
    ObjectKey,
    OssConnection,
    StorageError,
    // Models
    UploadFile,
    UploadResult,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{FileHandler, OptionSource, OssSession, OssSessionFactory, PutReceipt, SessionGuard};

// Service implementations
pub use services::{AliyunFileHandler, FileHandlers};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, OptionsBackend,
    StorageBackend, create_aliyun_app_from_env, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    config::{EnvOptions, JsonFileOptions, StaticOptions},
    storage::{AliyunSessionFactory, InMemorySessionFactory, ObjectStoreSession},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AliyunFileHandler, AliyunSessionFactory, AppBuilder, AttachmentType, FileHandler,
        FileHandlers, InMemorySessionFactory, StaticOptions, UploadFile, UploadResult,
        create_in_memory_app,
    };
}
