use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file-handling driver.
///
/// The cleaning core (geometry, walker) takes all inputs permissively and
/// has no error conditions of its own.
#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reported as a warning by the driver; a failed backup never aborts the run.
    #[error("could not write backup {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write cleaned document to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`CleanerError`].
pub type Result<T> = std::result::Result<T, CleanerError>;
