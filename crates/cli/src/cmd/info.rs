//! Info command implementation
//!
//! Inspect a generated project: check the canonical tree for missing
//! entries, show the sizes of the seeded files, and validate the config.

use anyhow::{Context, Result, bail};
use clap::Args;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::debug;
use winery_config::read_document;
use winery_core::file_size_display;
use winery_scaffold::Layout;

use crate::command::Command;

/// Sections the seeded config is expected to carry
const CONFIG_SECTIONS: &[&str] = &["data", "model", "logging"];

/// Inspect a generated project and validate its configuration
#[derive(Debug, Clone, Args)]
pub struct InfoCommand {
    /// Base directory of the project (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl Command for InfoCommand {
    type Output = ();

    fn execute(&self) -> Result<Self::Output> {
        let base = self.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let layout = Layout::new(&base);
        let package_dir = layout.package_dir();
        debug!(path = %package_dir.display(), "inspecting project");

        if !package_dir.is_dir() {
            bail!("no project found at {}", package_dir.display());
        }

        println!("Project: {}", package_dir.display());

        let missing = report_missing(&layout);

        println!("\nSeeded files:");
        for file in seeded_files(&layout) {
            match file_size_display(&file) {
                Ok(size) => println!("  {} {}", file.display(), size.dimmed()),
                Err(_) => println!("  {} {}", file.display(), "missing".yellow()),
            }
        }

        validate_config(&package_dir)?;

        if missing > 0 {
            bail!("{missing} entries are missing; re-run `winery init --force`");
        }
        println!("\n{} Project structure OK", "✓".green());
        Ok(())
    }
}

/// Print missing directories and files, returning how many there are
fn report_missing(layout: &Layout) -> usize {
    let mut missing = 0;
    for dir in layout.directories() {
        if !dir.is_dir() {
            println!("  {} missing directory {}", "⚠".yellow(), dir.display());
            missing += 1;
        }
    }
    for file in layout.files() {
        if !file.is_file() {
            println!("  {} missing file {}", "⚠".yellow(), file.display());
            missing += 1;
        }
    }
    missing
}

/// The files seeded with template content whose sizes are worth showing
fn seeded_files(layout: &Layout) -> Vec<PathBuf> {
    layout
        .files()
        .into_iter()
        .filter(|file| winery_scaffold::templates::for_path(file, layout.project_name()).is_some())
        .collect()
}

/// Check that the seeded config parses and carries the expected sections
fn validate_config(package_dir: &Path) -> Result<()> {
    let config_path = package_dir.join("config/config.yaml");
    let doc = read_document(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;

    let mut absent = Vec::new();
    for &section in CONFIG_SECTIONS {
        if !doc.contains(section) {
            absent.push(section);
        }
    }
    if !absent.is_empty() {
        bail!(
            "{} is missing the {} section(s)",
            config_path.display(),
            absent.join(", ")
        );
    }

    println!("\nConfig: {} {}", config_path.display(), "valid".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use winery_scaffold::Scaffolder;

    fn scaffolded() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        Scaffolder::new(Layout::new(tmp.path()))
            .interactive(false)
            .run()
            .unwrap();
        tmp
    }

    #[test]
    fn test_info_on_fresh_scaffold_passes() {
        let tmp = scaffolded();
        let cmd = InfoCommand {
            path: Some(tmp.path().to_path_buf()),
        };
        cmd.execute().unwrap();
    }

    #[test]
    fn test_info_without_project_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let cmd = InfoCommand {
            path: Some(tmp.path().to_path_buf()),
        };
        assert!(cmd.execute().is_err());
    }

    #[test]
    fn test_info_reports_incomplete_tree() {
        let tmp = scaffolded();
        std::fs::remove_file(tmp.path().join("wine_quality_ml/params.yaml")).unwrap();

        let cmd = InfoCommand {
            path: Some(tmp.path().to_path_buf()),
        };
        let err = cmd.execute().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_info_rejects_broken_config() {
        let tmp = scaffolded();
        std::fs::write(
            tmp.path().join("wine_quality_ml/config/config.yaml"),
            "model: [unterminated\n",
        )
        .unwrap();

        let cmd = InfoCommand {
            path: Some(tmp.path().to_path_buf()),
        };
        assert!(cmd.execute().is_err());
    }
}
