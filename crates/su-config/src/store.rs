//! In-memory property store with optional JSON file backing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::ConfigurationSource;

/// Thread-safe key-value property store.
///
/// Values are plain strings. A store opened from a file remembers its path
/// and can be refreshed with [`PropertyStore::reload`].
#[derive(Debug, Default)]
pub struct PropertyStore {
    properties: RwLock<HashMap<String, String>>,
    path: Option<PathBuf>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let properties = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            properties: RwLock::new(properties),
            path: None,
        }
    }

    /// Opens a store backed by a flat JSON object.
    ///
    /// String, boolean and number values are accepted; anything else is
    /// rejected with [`ConfigError::InvalidValue`].
    pub fn open(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let properties = read_file(&path)?;
        info!(path = %path.display(), count = properties.len(), "loaded properties");
        Ok(Self {
            properties: RwLock::new(properties),
            path: Some(path),
        })
    }

    /// Re-reads the backing file, replacing every property.
    ///
    /// A store without a backing file is left untouched. On failure the
    /// previous properties are kept.
    pub fn reload(&self) -> ConfigResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let properties = read_file(path)?;
        debug!(path = %path.display(), count = properties.len(), "reloaded properties");
        *self.properties.write() = properties;
        Ok(())
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Sets a property, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.write().insert(key.into(), value.into())
    }

    /// Removes a property, returning its value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.properties.write().remove(key)
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }
}

impl ConfigurationSource for PropertyStore {
    fn get_string(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.properties.read().get(key).cloned())
    }
}

fn read_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map: serde_json::Map<String, Value> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    map.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(ConfigError::InvalidValue {
                        key,
                        reason: format!("unsupported value type: {other}"),
                    });
                }
            };
            Ok((key, value))
        })
        .collect()
}
