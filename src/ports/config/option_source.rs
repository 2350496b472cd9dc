use std::collections::HashMap;

use crate::domain::errors::ConfigResult;

/// Port for the option service that stores handler settings
///
/// Implementations must read the current value on every call; handlers rely
/// on this to pick up setting changes without a restart.
pub trait OptionSource: Send + Sync + 'static {
    /// Look up the raw string value of an option
    fn get(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Look up several options as one consistent view. Unset keys are absent
    /// from the returned map.
    ///
    /// Sources backed by a file or a remote service should override this so
    /// the backing store is read once per call.
    fn get_many(&self, keys: &[&'static str]) -> ConfigResult<HashMap<&'static str, String>> {
        let mut values = HashMap::with_capacity(keys.len());
        for &key in keys {
            if let Some(value) = self.get(key)? {
                values.insert(key, value);
            }
        }
        Ok(values)
    }
}
