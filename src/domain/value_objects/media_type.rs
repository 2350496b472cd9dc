use std::str::FromStr;

use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// A parsed media type, parameters preserved as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaType {
    raw: String,
    mime: Mime,
}

impl MediaType {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let raw = value.trim();
        let mime = raw
            .parse::<Mime>()
            .map_err(|_| ValidationError::InvalidMediaType(value.to_string()))?;

        if mime.subtype().as_str().is_empty() {
            return Err(ValidationError::InvalidMediaType(value.to_string()));
        }

        Ok(Self {
            raw: raw.to_string(),
            mime,
        })
    }

    /// The top-level type, lowercased, e.g. `image`
    pub fn type_(&self) -> &str {
        self.mime.type_().as_str()
    }

    /// The subtype, lowercased, e.g. `png`
    pub fn subtype(&self) -> &str {
        self.mime.subtype().as_str()
    }

    /// `type/subtype` without parameters
    pub fn essence(&self) -> &str {
        self.mime.essence_str()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn mime(&self) -> &Mime {
        &self.mime
    }

    /// Whether this media type is included by `image/*`
    pub fn is_image(&self) -> bool {
        self.mime.type_() == mime::IMAGE
    }
}

impl FromStr for MediaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MediaType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.raw
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
