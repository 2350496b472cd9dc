use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    domain::errors::{ConfigError, ConfigResult},
    ports::OptionSource,
};

/// Option source backed by a flat JSON object on disk
///
/// The file is read again on every lookup, once per [`OptionSource::get_many`]
/// call. String values are returned as-is,
/// numbers and booleans in their JSON text form, `null` as unset.
#[derive(Debug, Clone)]
pub struct JsonFileOptions {
    path: PathBuf,
}

impl JsonFileOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ConfigResult<HashMap<String, Value>> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

fn option_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl OptionSource for JsonFileOptions {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.load()?.remove(key).and_then(option_value))
    }

    fn get_many(&self, keys: &[&'static str]) -> ConfigResult<HashMap<&'static str, String>> {
        let mut document = self.load()?;
        Ok(keys
            .iter()
            .filter_map(|&key| {
                document
                    .remove(key)
                    .and_then(option_value)
                    .map(|value| (key, value))
            })
            .collect())
    }
}
