//! Filesystem helpers
//!
//! Small blocking helpers shared by the scaffolder and the CLI: idempotent
//! directory creation and a human-readable file size string.

use crate::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Create each directory in `paths`, parents included
///
/// Creation is idempotent: a directory that already exists is not an error.
/// Each successful creation is logged. The first failure is logged and
/// returned, abandoning any remaining paths.
///
/// # Errors
///
/// Returns the underlying IO error of the first directory that could not be
/// created.
pub fn create_directories<I, P>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        match fs::create_dir_all(path) {
            Ok(()) => info!(path = %path.display(), "created directory"),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to create directory");
                return Err(e.into());
            }
        }
    }
    Ok(())
}

/// Return the size of the file at `path` in kibibytes, rounded to nearest
///
/// The result is formatted as `"~ {n} KB"`.
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read.
pub fn file_size_display(path: &Path) -> Result<String> {
    let bytes = fs::metadata(path)?.len();
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let size_in_kb = (bytes as f64 / 1024.0).round() as u64;
    Ok(format!("~ {size_in_kb} KB"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_create_directories_with_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        create_directories([&nested]).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_directories_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = vec![tmp.path().join("data/01_raw"), tmp.path().join("logs")];

        create_directories(&paths).unwrap();
        // Second run must leave the filesystem in the same state, not error.
        create_directories(&paths).unwrap();

        for path in &paths {
            assert!(path.is_dir());
        }
    }

    #[test]
    fn test_create_directories_stops_on_first_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let after = tmp.path().join("never_created");
        let result = create_directories([blocker.join("child"), after.clone()]);

        assert!(result.is_err());
        assert!(!after.exists());
    }

    #[test]
    fn test_file_size_display_exact_kilobytes() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("two_kb.bin");
        std::fs::write(&file, vec![0u8; 2048]).unwrap();
        assert_eq!(file_size_display(&file).unwrap(), "~ 2 KB");
    }

    #[test]
    fn test_file_size_display_rounds_to_nearest() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("one_and_a_half_kb.bin");
        std::fs::write(&file, vec![0u8; 1536]).unwrap();
        assert_eq!(file_size_display(&file).unwrap(), "~ 2 KB");
    }

    #[test]
    fn test_file_size_display_missing_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(file_size_display(&tmp.path().join("absent")).is_err());
    }
}
