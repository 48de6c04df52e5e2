//! Core types and utilities for winery
//!
//! This is the foundation crate that all other winery crates depend on.
//! It provides:
//! - Base error types
//! - Filesystem helpers (idempotent directory creation, file size display)
//!
//! This crate has no dependencies on other winery crates.

pub mod error;
pub mod fs;

pub use error::{Error, Result};
pub use fs::{create_directories, file_size_display};
