//! Command trait for winery CLI
//!
//! This module defines the `Command` trait that all winery commands
//! implement. It provides a uniform interface for command execution, making
//! it easier to test, extend, and maintain commands.

use anyhow::Result;

/// Trait for all winery commands
///
/// Commands can specify their return type via the `Output` associated type.
/// Most commands return `()`, but some may return values (e.g., init
/// returns the scaffolding outcome).
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails to execute. Error messages
    /// should be descriptive enough for the user to understand what went
    /// wrong.
    fn execute(&self) -> Result<Self::Output>;
}
