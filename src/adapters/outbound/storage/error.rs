use crate::domain::{errors::StorageError, value_objects::ObjectKey};

/// Map an object_store error raised while operating on `key`
pub fn storage_error(err: object_store::Error, key: &ObjectKey) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound { key: key.clone() },
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => StorageError::AccessDenied {
            key: key.clone(),
            operation: err.to_string(),
        },
        other => other.into(),
    }
}

/// Convert object_store errors to domain storage errors
impl From<object_store::Error> for StorageError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => match ObjectKey::new(path.clone()) {
                Ok(key) => StorageError::ObjectNotFound { key },
                Err(_) => StorageError::ValidationError {
                    message: format!("Invalid object path from store: {}", path),
                },
            },
            object_store::Error::NotSupported { .. } | object_store::Error::NotImplemented => {
                StorageError::UnsupportedOperation {
                    operation: "unknown".to_string(),
                    reason: err.to_string(),
                }
            }
            object_store::Error::UnknownConfigurationKey { .. } => {
                StorageError::ValidationError {
                    message: err.to_string(),
                }
            }
            object_store::Error::Generic { store, source } => StorageError::StorageBackendError {
                message: format!("{} backend failed: {}", store, source),
            },
            _ => StorageError::InfrastructureError {
                message: format!("Object store operation failed: {}", err),
                source: Some(err.to_string()),
            },
        }
    }
}
