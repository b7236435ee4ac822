use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a project scan
///
/// Only the root directory can fail a scan. Everything below it degrades to
/// a warning and an empty entry.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root path does not exist or cannot be stat'ed
    #[error("Scan root {path} not found: {source}")]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root path exists but is a file
    #[error("Scan root {path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// The root directory cannot be listed
    #[error("Scan root {path} is not readable: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid scan configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
