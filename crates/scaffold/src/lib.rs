//! Project scaffolding for the wine quality ML workflow
//!
//! This crate generates the canonical layered project skeleton: a fixed
//! directory tree, empty module stubs, and a handful of files seeded with
//! static boilerplate.

pub mod error;
pub mod layout;
pub mod scaffolder;
pub mod templates;

pub use error::{Error, Result};
pub use layout::Layout;
pub use scaffolder::{Outcome, Scaffolder};
