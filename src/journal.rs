//! Append-only availability log.
//!
//! Every record is one line `"YYYY-MM-DD HH:MM:SS <payload>"`. The file is
//! opened, appended and closed for each record, so no handle is held between
//! cycles and a record is on disk as soon as [`Journal::append`] returns.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "netavail.log";

/// Local timestamp format used on every log line and status message.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Errors that can occur while appending to the log.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Log file could not be opened or created.
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be written.
    #[error("failed to write log file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only log file.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped record.
    ///
    /// # Errors
    /// Returns `JournalError` if the file cannot be opened or written. The
    /// record is lost in that case; nothing is retried.
    pub fn append(&self, payload: &str) -> Result<(), JournalError> {
        let line = format!("{} {}\n", timestamp(), payload);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| JournalError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(line.as_bytes())
            .map_err(|source| JournalError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::trace!(path = %self.path.display(), payload, "Journal record appended");
        Ok(())
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}
