//! Error types for scaffolding

use thiserror::Error;

/// Errors that can occur while generating the project structure
#[derive(Error, Debug)]
pub enum Error {
    /// IO error, passed through unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Core error from shared helpers
    #[error(transparent)]
    Core(#[from] winery_core::Error),

    /// Failure reading the overwrite confirmation
    #[error("failed to read user input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
