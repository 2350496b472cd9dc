use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{domain::errors::ConfigResult, ports::OptionSource};

/// Option source backed by a shared in-memory map
///
/// Clones share the same map, so values set through one clone are seen by
/// handlers holding another.
#[derive(Debug, Clone, Default)]
pub struct StaticOptions {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl StaticOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.write().remove(key);
    }

    // A panic while holding the lock cannot leave a half-written map behind,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> FromIterator<(K, V)> for StaticOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

impl OptionSource for StaticOptions {
    fn get(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.read().get(key).cloned())
    }
}
