use crate::domain::{
    errors::{ConfigError, ConfigResult},
    value_objects::BucketName,
};

const DEFAULT_PROTOCOL: &str = "https://";

/// Option keys read by the Aliyun OSS file handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliyunProperty {
    Protocol,
    Domain,
    Endpoint,
    AccessKey,
    AccessSecret,
    BucketName,
    StyleRule,
    ThumbnailStyleRule,
}

impl AliyunProperty {
    pub const ALL: [AliyunProperty; 8] = [
        AliyunProperty::Protocol,
        AliyunProperty::Domain,
        AliyunProperty::Endpoint,
        AliyunProperty::AccessKey,
        AliyunProperty::AccessSecret,
        AliyunProperty::BucketName,
        AliyunProperty::StyleRule,
        AliyunProperty::ThumbnailStyleRule,
    ];

    /// Option keys of every property, in declaration order
    pub fn keys() -> [&'static str; 8] {
        Self::ALL.map(|property| property.key())
    }

    pub fn key(&self) -> &'static str {
        match self {
            AliyunProperty::Protocol => "oss_ali_domain_protocol",
            AliyunProperty::Domain => "oss_ali_domain",
            AliyunProperty::Endpoint => "oss_ali_endpoint",
            AliyunProperty::AccessKey => "oss_ali_access_key",
            AliyunProperty::AccessSecret => "oss_ali_access_secret",
            AliyunProperty::BucketName => "oss_ali_bucket_name",
            AliyunProperty::StyleRule => "oss_ali_style_rule",
            AliyunProperty::ThumbnailStyleRule => "oss_ali_thumbnail_style_rule",
        }
    }
}

/// What a storage session needs to authenticate against one bucket
#[derive(Clone)]
pub struct OssConnection {
    pub protocol: String,
    pub endpoint: String,
    pub access_key: String,
    pub access_secret: String,
    pub bucket: BucketName,
}

impl std::fmt::Debug for OssConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OssConnection")
            .field("protocol", &self.protocol)
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key)
            .field("access_secret", &"***")
            .field("bucket", &self.bucket)
            .finish()
    }
}

/// Snapshot of the Aliyun OSS options taken at the start of a call
#[derive(Debug, Clone)]
pub struct AliyunOssConfig {
    pub connection: OssConnection,
    pub domain: String,
    pub style_rule: String,
    pub thumbnail_style_rule: String,
}

impl AliyunOssConfig {
    /// Build a snapshot from an option lookup.
    ///
    /// Endpoint, access key, access secret and bucket name must be present and
    /// non-blank. The protocol falls back to `https://`; the domain and both
    /// style rules fall back to the empty string.
    pub fn from_lookup<F>(mut lookup: F) -> ConfigResult<Self>
    where
        F: FnMut(&'static str) -> ConfigResult<Option<String>>,
    {
        let mut required = |property: AliyunProperty| -> ConfigResult<String> {
            lookup(property.key())?
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingProperty {
                    key: property.key(),
                })
        };

        let endpoint = required(AliyunProperty::Endpoint)?;
        let access_key = required(AliyunProperty::AccessKey)?;
        let access_secret = required(AliyunProperty::AccessSecret)?;
        let bucket_name = required(AliyunProperty::BucketName)?;

        let mut optional = |property: AliyunProperty| -> ConfigResult<String> {
            Ok(lookup(property.key())?
                .map(|value| value.trim().to_string())
                .unwrap_or_default())
        };

        let protocol = optional(AliyunProperty::Protocol)?;
        let domain = optional(AliyunProperty::Domain)?;

        // Style rules are URL suffixes and are appended exactly as configured
        let mut suffix = |property: AliyunProperty| -> ConfigResult<String> {
            Ok(lookup(property.key())?
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_default())
        };

        let style_rule = suffix(AliyunProperty::StyleRule)?;
        let thumbnail_style_rule = suffix(AliyunProperty::ThumbnailStyleRule)?;

        let bucket = BucketName::new(bucket_name).map_err(|e| ConfigError::InvalidProperty {
            key: AliyunProperty::BucketName.key(),
            message: e.to_string(),
        })?;

        Ok(Self {
            connection: OssConnection {
                protocol: if protocol.is_empty() {
                    DEFAULT_PROTOCOL.to_string()
                } else {
                    protocol
                },
                endpoint,
                access_key,
                access_secret,
                bucket,
            },
            domain,
            style_rule,
            thumbnail_style_rule,
        })
    }

    /// Origin that public URLs are built on.
    ///
    /// The custom domain when one is configured, otherwise the bucket's
    /// virtual-hosted origin `{bucket}.{endpoint}`; both carry the protocol.
    pub fn public_origin(&self) -> String {
        let protocol = &self.connection.protocol;
        if self.domain.is_empty() {
            format!(
                "{}{}.{}",
                protocol, self.connection.bucket, self.connection.endpoint
            )
        } else {
            format!("{}{}", protocol, self.domain)
        }
    }

    /// Public URL of `key`, with exactly one `/` between origin and key
    pub fn public_path(&self, key: &str) -> String {
        let mut path = self.public_origin();
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(key);
        path
    }
}
