use std::{path::PathBuf, sync::Arc};

use crate::{
    adapters::outbound::{
        config::{EnvOptions, JsonFileOptions, StaticOptions},
        storage::{AliyunSessionFactory, InMemorySessionFactory},
    },
    ports::{config::OptionSource, storage::OssSessionFactory},
    services::{AliyunFileHandler, FileHandlers},
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    pub options_backend: OptionsBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory,
            options_backend: OptionsBackend::Environment { prefix: None },
        }
    }
}

/// Where uploaded objects go
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Process-local store, for development and tests
    InMemory,
    /// Aliyun OSS through its S3-compatible API
    AliyunOss,
}

/// Where handler options are read from
#[derive(Debug, Clone)]
pub enum OptionsBackend {
    Environment { prefix: Option<String> },
    JsonFile { path: PathBuf },
    Static(StaticOptions),
}

/// Application dependencies container
pub struct AppDependencies {
    pub options: Arc<dyn OptionSource>,
    pub sessions: Arc<dyn OssSessionFactory>,
}

/// Application services container
pub struct AppServices {
    pub file_handlers: FileHandlers,
    pub aliyun_handler: Arc<AliyunFileHandler>,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    sessions: Option<Arc<dyn OssSessionFactory>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            sessions: None,
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Configure options backend
    pub fn with_options_backend(mut self, backend: OptionsBackend) -> Self {
        self.config.options_backend = backend;
        self
    }

    /// Use a prepared session factory instead of the configured storage backend
    pub fn with_session_factory(mut self, sessions: Arc<dyn OssSessionFactory>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Build the application dependencies
    pub fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let options = self.create_option_source()?;
        let sessions = match self.sessions {
            Some(sessions) => sessions,
            None => Self::create_session_factory(&self.config.storage_backend),
        };

        Ok(AppDependencies { options, sessions })
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies()?;

        let aliyun_handler = Arc::new(AliyunFileHandler::new(
            deps.options.clone(),
            deps.sessions.clone(),
        ));
        let file_handlers = FileHandlers::new().with_handler(aliyun_handler.clone());

        Ok(AppServices {
            file_handlers,
            aliyun_handler,
        })
    }

    fn create_option_source(&self) -> Result<Arc<dyn OptionSource>, AppError> {
        match &self.config.options_backend {
            OptionsBackend::Environment { prefix } => Ok(match prefix {
                Some(prefix) => Arc::new(EnvOptions::with_prefix(prefix.clone())),
                None => Arc::new(EnvOptions::new()),
            }),
            OptionsBackend::JsonFile { path } => {
                if !path.is_file() {
                    return Err(AppError::Configuration {
                        message: format!("Options file {} does not exist", path.display()),
                    });
                }
                Ok(Arc::new(JsonFileOptions::new(path.clone())))
            }
            OptionsBackend::Static(options) => Ok(Arc::new(options.clone())),
        }
    }

    fn create_session_factory(backend: &StorageBackend) -> Arc<dyn OssSessionFactory> {
        match backend {
            StorageBackend::InMemory => Arc::new(InMemorySessionFactory::new()),
            StorageBackend::AliyunOss => Arc::new(AliyunSessionFactory::new()),
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Create an in-memory application driven by the given options
pub fn create_in_memory_app(options: StaticOptions) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .with_options_backend(OptionsBackend::Static(options))
        .build()
}

/// Create an Aliyun OSS application reading options from environment variables
pub fn create_aliyun_app_from_env() -> Result<AppServices, AppError> {
    let prefix = std::env::var("OSS_OPTIONS_PREFIX").ok();
    AppBuilder::new()
        .with_storage_backend(StorageBackend::AliyunOss)
        .with_options_backend(OptionsBackend::Environment { prefix })
        .build()
}
