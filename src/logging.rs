//! Logger setup for the binary
//!
//! The library only talks to the `log` facade. The binary installs `env_logger` here, with
//! the level taken from the `-v` count unless `RUST_LOG` says otherwise. The TUI owns the
//! terminal, so in that mode records go to a file instead of stderr.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used for the TUI log
pub const LOG_FILE_NAME: &str = "wordle.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to `wordle.log` in this directory
    FileIn(PathBuf),
}

/// Default level for a `-v` count
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// # Errors
/// Fails if the log file cannot be opened or a logger is already installed.
pub fn init(verbosity: u8, target: &LogTarget) -> Result<(), LoggingError> {
    let env = Env::default().default_filter_or(level_for(verbosity).as_str());
    let mut builder = Builder::from_env(env);

    if let LogTarget::FileIn(dir) = target {
        let file = open_log_file(dir)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

fn open_log_file(dir: &Path) -> Result<fs::File, LoggingError> {
    let path = dir.join(LOG_FILE_NAME);
    fs::create_dir_all(dir)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(&path))
        .map_err(|source| LoggingError::File { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn log_file_is_created_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state");

        open_log_file(&nested).unwrap();
        assert!(nested.join(LOG_FILE_NAME).exists());
    }
}
