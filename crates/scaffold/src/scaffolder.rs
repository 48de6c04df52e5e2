//! Project structure generation
//!
//! Creates the canonical directory tree and file set on disk. An existing
//! package directory is only replaced after explicit confirmation (or with
//! force), and the first creation error aborts the whole run.

use crate::layout::Layout;
use crate::templates;
use crate::{Error, Result};
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{error, info, warn};
use winery_core::create_directories;

/// How a scaffolding run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The full tree was created
    Created,
    /// An existing tree was left untouched because overwrite was refused
    Declined,
}

/// Generates the project structure described by a [`Layout`]
#[derive(Debug)]
pub struct Scaffolder {
    layout: Layout,
    force: bool,
    interactive: bool,
}

impl Scaffolder {
    /// A scaffolder for `layout`
    ///
    /// Overwrite prompting is enabled when stdin is a terminal; without a
    /// terminal an existing tree is declined unless [`force`](Self::force)
    /// is set.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            force: false,
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Replace an existing package directory without prompting
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Override terminal detection for the overwrite prompt
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// The layout this scaffolder generates
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Create the complete project structure
    ///
    /// If the package directory already exists it is recursively deleted
    /// first, after confirmation. Directories are created idempotently;
    /// files are touched if absent, and template-matched files always get
    /// their boilerplate body written.
    ///
    /// # Errors
    ///
    /// Returns the first directory or file creation error; nothing further
    /// is attempted after a failure.
    pub fn run(&self) -> Result<Outcome> {
        let package_dir = self.layout.package_dir();
        if package_dir.exists() {
            warn!(path = %package_dir.display(), "project directory already exists");
            if !self.confirm_overwrite(&package_dir)? {
                info!("project creation aborted");
                return Ok(Outcome::Declined);
            }
            fs::remove_dir_all(&package_dir)?;
        }

        create_directories(self.layout.directories())?;

        for file in self.layout.files() {
            self.create_file(&file)?;
        }

        info!("project structure created successfully");
        Ok(Outcome::Created)
    }

    fn confirm_overwrite(&self, package_dir: &Path) -> Result<bool> {
        if self.force {
            return Ok(true);
        }
        if !self.interactive {
            warn!("refusing to overwrite without --force in non-interactive mode");
            return Ok(false);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Project directory {} already exists. Overwrite it?",
                package_dir.display()
            ))
            .default(false)
            .interact()?)
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        let attempt = || -> std::io::Result<()> {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            match templates::for_path(path, self.layout.project_name()) {
                Some(content) => fs::write(path, content.as_bytes())?,
                None => {
                    // Touch: create if absent, leave existing content alone.
                    fs::OpenOptions::new().create(true).append(true).open(path)?;
                }
            }
            Ok(())
        };
        match attempt() {
            Ok(()) => {
                info!(path = %path.display(), "created file");
                Ok(())
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to create file");
                Err(Error::Io(e))
            }
        }
    }
}
