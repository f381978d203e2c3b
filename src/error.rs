use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the catalog store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema creation failed
    #[error("Migration failed: {message}")]
    Migration { message: String },

    /// The database location could not be prepared
    #[error("Invalid database location {}: {message}", path.display())]
    InvalidLocation { path: PathBuf, message: String },
}

/// Errors raised by the content service.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The requested file is missing, unreadable, or outside the storage root
    /// (should map to HTTP 404)
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The catalog store failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors that abort the startup seed routine.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Creating a directory or placeholder file failed
    #[error("Failed to prepare {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Counting or inserting placeholder rows failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl SeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SeedError::Io {
            path: path.into(),
            source,
        }
    }
}
