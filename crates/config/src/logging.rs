//! Logging initialization for winery
//!
//! Provides terminal output plus a size-rotating log file using tracing,
//! and the observe-and-rethrow wrapper for cross-cutting failure logging.

use crate::{Error, Result};
use chrono::{DateTime, Local};
use std::backtrace::Backtrace;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::error;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rotation threshold for the file sink
pub const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated log files retained
pub const MAX_LOG_BACKUPS: usize = 5;

const LOG_FILE_PREFIX: &str = "wine_quality";

/// Initialize the logging system
///
/// Installs a console sink (compact format: timestamp, level, message) and,
/// when `log_dir` is given, a rotating file sink (verbose format: timestamp,
/// target, level, source file:line, message) writing to a timestamped file
/// under `log_dir`. The file rotates at [`MAX_LOG_SIZE`] bytes with
/// [`MAX_LOG_BACKUPS`] backups retained.
///
/// The default severity threshold is `info`, or `debug` when `verbose` is
/// set; both can be overridden with the `RUST_LOG` env var.
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_dir` - Optional directory to write log files to
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or if
/// logging was already initialized. A second call never stacks duplicate
/// sinks onto the first.
pub fn init(verbose: bool, log_dir: Option<&Path>) -> Result<()> {
    // Determine log level based on verbose flag
    let level = if verbose { "debug" } else { "info" };

    // Create environment filter
    // Allows overriding with RUST_LOG env var
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "winery={level},winery_config={level},winery_scaffold={level},winery_core={level}"
            ))
        })
        .expect("failed to create default env filter");

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true)
        .with_filter(env_filter);

    match log_dir {
        Some(dir) => {
            winery_core::create_directories([dir])?;
            let log_path = dir.join(log_file_name(Local::now()));
            let writer = RotatingFile::create(&log_path, MAX_LOG_SIZE, MAX_LOG_BACKUPS)?;

            let file_layer = fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(EnvFilter::try_new("debug").expect("'debug' is a valid filter"));

            tracing_subscriber::registry()
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| Error::LoggingInit(e.to_string()))?;
        }
        None => {
            tracing_subscriber::registry()
                .with(stdout_layer)
                .try_init()
                .map_err(|e| Error::LoggingInit(e.to_string()))?;
        }
    }

    Ok(())
}

fn log_file_name(now: DateTime<Local>) -> String {
    format!("{LOG_FILE_PREFIX}_{}.log", now.format("%Y%m%d_%H%M%S"))
}

/// Run `f`, logging any failure before propagating it unchanged
///
/// On `Err` the operation name, the error text, and a captured backtrace
/// are logged at error level, then the original error is returned to the
/// caller. Errors are never suppressed or transformed.
pub fn observe<T, E>(
    operation: &str,
    f: impl FnOnce() -> std::result::Result<T, E>,
) -> std::result::Result<T, E>
where
    E: Display,
{
    match f() {
        Ok(value) => Ok(value),
        Err(e) => {
            error!(operation, error = %e, "operation failed");
            error!("backtrace:\n{}", Backtrace::force_capture());
            Err(e)
        }
    }
}

/// A log file that rotates once it exceeds a size threshold
///
/// When a write would push the current file past the threshold, the file is
/// renamed to `<name>.1` (existing backups shift to `.2`, `.3`, ...) and a
/// fresh file is started. At most `backups` rotated files are retained; the
/// oldest is dropped on the next rotation.
///
/// The handle is cheaply cloneable; all clones share one file and offset.
#[derive(Clone)]
pub struct RotatingFile {
    inner: Arc<Mutex<RotatingInner>>,
}

struct RotatingInner {
    path: PathBuf,
    file: File,
    written: u64,
    max_size: u64,
    backups: usize,
}

impl RotatingFile {
    /// Open (or create) the log file at `path`
    ///
    /// Writes append to an existing file; its current length counts toward
    /// the rotation threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn create(path: &Path, max_size: u64, backups: usize) -> io::Result<Self> {
        let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            inner: Arc::new(Mutex::new(RotatingInner {
                path: path.to_path_buf(),
                file,
                written,
                max_size,
                backups,
            })),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RotatingInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl RotatingInner {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_size {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        // Shift existing backups up by one; the oldest falls off the end.
        for index in (1..self.backups).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }
        if self.backups > 0 && self.path.exists() {
            fs::rename(&self.path, backup_path(&self.path, 1))?;
        }
        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl Write for &RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().file.flush()
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}
