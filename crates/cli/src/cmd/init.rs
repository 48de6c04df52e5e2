//! Init command implementation
//!
//! Generate the project structure at a base directory.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::debug;
use winery_config::observe;
use winery_scaffold::{Layout, Outcome, Scaffolder};

use crate::command::Command;

/// Generate the project structure
#[derive(Debug, Clone, Args)]
pub struct InitCommand {
    /// Base directory to scaffold into (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Replace an existing project directory without prompting
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be created without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Command for InitCommand {
    type Output = Option<Outcome>;

    fn execute(&self) -> Result<Self::Output> {
        let base = self.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let layout = Layout::new(&base);
        debug!(base = %base.display(), project = layout.project_name(), "initializing project");

        if self.dry_run {
            print_plan(&layout);
            return Ok(None);
        }

        let outcome = observe("create project structure", || {
            Scaffolder::new(layout.clone()).force(self.force).run()
        })?;

        match outcome {
            Outcome::Created => {
                println!(
                    "\n{} Project structure created at {}",
                    "✓".green(),
                    layout.package_dir().display()
                );
                println!("\nNext steps:");
                println!("  1. Review the generated config: winery info {}", base.display());
                println!("  2. Fill in the pipeline stages under src/");
            }
            Outcome::Declined => {
                println!("{}", "Project creation aborted.".yellow());
            }
        }

        Ok(Some(outcome))
    }
}

fn print_plan(layout: &Layout) {
    println!("Would create under {}:", layout.package_dir().display());
    for dir in layout.directories() {
        println!("  {}{}", dir.display(), std::path::MAIN_SEPARATOR);
    }
    for file in layout.files() {
        println!("  {}", file.display());
    }
    println!(
        "\n{} directories, {} files (dry run, nothing written)",
        layout.directories().len(),
        layout.files().len()
    );
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_dry_run_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let cmd = InitCommand {
            path: Some(tmp.path().to_path_buf()),
            force: false,
            dry_run: true,
        };

        assert!(cmd.execute().unwrap().is_none());
        assert!(!tmp.path().join("wine_quality_ml").exists());
    }

    #[test]
    fn test_force_init_into_fresh_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let cmd = InitCommand {
            path: Some(tmp.path().to_path_buf()),
            force: true,
            dry_run: false,
        };

        assert_eq!(cmd.execute().unwrap(), Some(Outcome::Created));
        assert!(tmp.path().join("wine_quality_ml/config/config.yaml").is_file());
    }
}
