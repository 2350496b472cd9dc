use crate::{domain::errors::ConfigResult, ports::OptionSource};

/// Option source reading process environment variables
///
/// The option key `oss_ali_endpoint` is looked up as `OSS_ALI_ENDPOINT`,
/// preceded by the prefix when one is set.
#[derive(Debug, Clone, Default)]
pub struct EnvOptions {
    prefix: Option<String>,
}

impl EnvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    pub fn variable_name(&self, key: &str) -> String {
        let name = key.to_ascii_uppercase();
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name,
        }
    }
}

impl OptionSource for EnvOptions {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(std::env::var(self.variable_name(key)).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name() {
        assert_eq!(
            EnvOptions::new().variable_name("oss_ali_endpoint"),
            "OSS_ALI_ENDPOINT"
        );
        assert_eq!(
            EnvOptions::with_prefix("HALO_").variable_name("oss_ali_bucket_name"),
            "HALO_OSS_ALI_BUCKET_NAME"
        );
    }

    #[test]
    fn test_unset_variable_is_none() {
        let options = EnvOptions::with_prefix("OSS_ATTACHMENTS_TEST_UNSET_");
        assert_eq!(options.get("oss_ali_domain").unwrap(), None);
    }
}
