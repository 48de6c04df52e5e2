//! Configuration and logging utilities for winery
//!
//! This crate handles:
//! - YAML document loading and saving
//! - Explicit accessors over parsed YAML mappings
//! - Logging initialization (console + rotating file sinks)
//! - The observe-and-rethrow failure wrapper

pub mod error;
pub mod logging;
pub mod yaml;

pub use error::{Error, Result};
pub use logging::{RotatingFile, observe};
pub use yaml::{Document, read_document, read_yaml, save_yaml};
