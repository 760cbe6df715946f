//! Error types for listing runs

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a listing run.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Directory traversal failed (permission denied, path vanished, missing root).
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Tracked-file lookup failed.
    #[error("failed to get Git-tracked files: {0}")]
    Git(#[from] git2::Error),

    /// The repository containing the root has no work tree.
    #[error("failed to get Git-tracked files: {} is inside a bare repository", path.display())]
    BareRepository { path: PathBuf },

    /// I/O error with path context.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListingError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
