//! Logger setup.
//!
//! The interactive editor owns the terminal, so its log records go to a
//! file. Non-interactive commands log to stderr unless a file is given.
//! A file the user asked for must open; the editor's default file may
//! fail, in which case records are dropped.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Logger configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Number of `-v` flags: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
    pub verbosity: u8,
    /// Append records to this file instead of stderr.
    pub file: Option<PathBuf>,
    /// When false, a `file` that cannot be opened drops records instead
    /// of failing `init`.
    pub file_required: bool,
}

/// Where log records ended up.
#[derive(Debug)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// The optional file could not be opened; records are discarded.
    Discarded { path: PathBuf, error: io::Error },
}

/// Returns the default log file for interactive mode.
///
/// On Linux: ~/.cache/triangles/triangles.log
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("triangles")
        .join("triangles.log")
}

/// Map a `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Open (creating parent directories) a log file for appending.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global logger.
///
/// `RUST_LOG` wins over `-v` when set. Calling this twice is harmless:
/// the second logger is rejected and a warning is emitted through the first.
///
/// Fails only when a required file cannot be opened.
pub fn init(config: &LogConfig) -> io::Result<LogTarget> {
    let default_level = level_for(config.verbosity).to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    let target = match &config.file {
        None => LogTarget::Stderr,
        Some(path) => match open_log_file(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
                LogTarget::File(path.clone())
            }
            Err(e) if config.file_required => return Err(e),
            Err(error) => {
                builder.target(Target::Pipe(Box::new(io::sink())));
                LogTarget::Discarded {
                    path: path.clone(),
                    error,
                }
            }
        },
    };

    if builder.try_init().is_err() {
        log::warn!("logger already initialised; ignoring second init");
    }
    Ok(target)
}

// ============================================================================
// TESTS
// ============================================================================
