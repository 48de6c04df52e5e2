//! YAML document loading and saving
//!
//! Documents are exposed through [`Document`], an ordered mapping with
//! explicit accessor functions. Call sites declare the fields they read;
//! there is no dynamic attribute-style access over arbitrary keys.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// An ordered view over a parsed YAML mapping
///
/// Insertion order of the underlying document is preserved. Lookups are
/// keyed by string; missing keys and wrong-typed values are distinct
/// errors naming the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    map: Mapping,
}

impl Document {
    /// Wrap an already-parsed YAML value
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAMapping`] if the value is not a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Mapping(map) => Ok(Self { map }),
            _ => Err(Error::NotAMapping),
        }
    }

    /// Look up a raw value by string key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// Whether the mapping contains `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The string keys of the mapping, in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.iter().filter_map(|(k, _)| k.as_str())
    }

    /// Number of top-level entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the mapping has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// A nested mapping under `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if the key is absent, or
    /// [`Error::WrongType`] if the value is not a mapping.
    pub fn section(&self, key: &str) -> Result<Self> {
        match self.require(key)? {
            Value::Mapping(map) => Ok(Self { map: map.clone() }),
            _ => Err(Error::WrongType {
                key: key.to_string(),
                expected: "mapping",
            }),
        }
    }

    /// An integer value under `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] or [`Error::WrongType`].
    pub fn integer(&self, key: &str) -> Result<i64> {
        self.require(key)?.as_i64().ok_or_else(|| Error::WrongType {
            key: key.to_string(),
            expected: "integer",
        })
    }

    /// A floating point value under `key`
    ///
    /// Integer values are widened to `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] or [`Error::WrongType`].
    pub fn float(&self, key: &str) -> Result<f64> {
        self.require(key)?.as_f64().ok_or_else(|| Error::WrongType {
            key: key.to_string(),
            expected: "float",
        })
    }

    /// A string value under `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] or [`Error::WrongType`].
    pub fn string(&self, key: &str) -> Result<String> {
        self.require(key)?
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| Error::WrongType {
                key: key.to_string(),
                expected: "string",
            })
    }

    /// A boolean value under `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] or [`Error::WrongType`].
    pub fn boolean(&self, key: &str) -> Result<bool> {
        self.require(key)?
            .as_bool()
            .ok_or_else(|| Error::WrongType {
                key: key.to_string(),
                expected: "boolean",
            })
    }

    fn require(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }
}

/// Read a YAML file and deserialize it into `T`
///
/// Success is logged. On failure the original IO or parse error is logged
/// and returned unchanged.
///
/// # Errors
///
/// Returns the underlying IO or YAML error.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let attempt = || -> Result<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    };
    match attempt() {
        Ok(value) => {
            info!(path = %path.display(), "YAML file loaded");
            Ok(value)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to load YAML file");
            Err(e)
        }
    }
}

/// Read a YAML file into an ordered [`Document`]
///
/// # Errors
///
/// Returns the underlying IO or YAML error, or [`Error::NotAMapping`] if
/// the document root is not a mapping.
pub fn read_document(path: &Path) -> Result<Document> {
    let value: Value = read_yaml(path)?;
    Document::from_value(value)
}

/// Serialize `data` as block-style YAML and write it to `path`
///
/// Success is logged. On failure the original IO or serialize error is
/// logged and returned unchanged.
///
/// # Errors
///
/// Returns the underlying IO or YAML error.
pub fn save_yaml<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let attempt = || -> Result<()> {
        let rendered = serde_yaml::to_string(data)?;
        fs::write(path, rendered)?;
        Ok(())
    };
    match attempt() {
        Ok(()) => {
            info!(path = %path.display(), "YAML file saved");
            Ok(())
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to save YAML file");
            Err(e)
        }
    }
}
