use crate::domain::errors::ValidationError;

const MAX_KEY_LEN: usize = 1024;

/// A validated object key in an OSS bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > MAX_KEY_LEN {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: MAX_KEY_LEN,
            });
        }

        // OSS rejects keys containing NUL and keys starting with a slash
        if value.contains('\0') {
            return Err(ValidationError::InvalidObjectKeyCharacter('\0'));
        }

        if value.starts_with('/') || value.starts_with('\\') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        Ok(Self(value))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the file name part of the key (everything after the last '/')
    pub fn file_name(&self) -> &str {
        self.0.rfind('/').map_or(&self.0, |idx| &self.0[idx + 1..])
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object_key() {
        assert!(ObjectKey::new("file.txt").is_ok());
        assert!(ObjectKey::new("folder/file.txt").is_ok());
        assert!(ObjectKey::new("logo_1712345678901.png").is_ok());
        assert!(ObjectKey::new("README_1712345678901.").is_ok());
    }

    #[test]
    fn test_invalid_object_key() {
        assert_eq!(ObjectKey::new(""), Err(ValidationError::EmptyObjectKey));
        assert_eq!(
            ObjectKey::new("/leading-slash"),
            Err(ValidationError::ObjectKeyStartsWithSlash)
        );
        assert!(ObjectKey::new("null\0byte").is_err());
        assert!(ObjectKey::new("x".repeat(1025)).is_err());
    }

    #[test]
    fn test_object_key_file_name() {
        let key = ObjectKey::new("folder/subfolder/file.txt").unwrap();
        assert_eq!(key.file_name(), "file.txt");

        let root_key = ObjectKey::new("file.txt").unwrap();
        assert_eq!(root_key.file_name(), "file.txt");
    }
}
