//! Error types for configuration handling
//!
//! IO and YAML failures are passed through unchanged so callers see the
//! original error, not a remapped message.

use thiserror::Error;

/// Errors that can occur while loading, saving, or reading configuration
#[derive(Error, Debug)]
pub enum Error {
    /// IO error, passed through unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parse or serialize error, passed through unchanged
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Core error from shared helpers
    #[error(transparent)]
    Core(#[from] winery_core::Error),

    /// A YAML document whose root is not a mapping
    #[error("YAML document root is not a mapping")]
    NotAMapping,

    /// A key that is absent from a mapping
    #[error("missing key: {0}")]
    MissingKey(String),

    /// A key whose value has an unexpected type
    #[error("key '{key}' is not a {expected}")]
    WrongType {
        /// The key that was looked up
        key: String,
        /// The expected value type
        expected: &'static str,
    },

    /// The logging system was initialized more than once
    #[error("logging already initialized: {0}")]
    LoggingInit(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
