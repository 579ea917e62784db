/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing file holds something other than a flat string map
    #[error("Corrupt store at {path}: {reason}")]
    Corrupt { path: String, reason: String },

    /// Shared state was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,

    /// Serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a corrupt store error
    pub fn corrupt(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for deck_core::DeckError {
    fn from(err: StorageError) -> Self {
        deck_core::DeckError::storage(err.to_string())
    }
}
