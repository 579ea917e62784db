/// Core error types for Deck Player
use thiserror::Error;

/// Result type alias using `DeckError`
pub type Result<T> = std::result::Result<T, DeckError>;

/// Core error type for Deck Player
#[derive(Error, Debug)]
pub enum DeckError {
    /// Index does not resolve to an entry of the addressed collection
    #[error("{collection} index out of bounds: {index} (len {len})")]
    IndexOutOfBounds {
        /// Which collection was addressed
        collection: &'static str,
        /// Requested index
        index: usize,
        /// Collection length at the time of the request
        len: usize,
    },

    /// Key-value persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Media handle errors
    #[error("Media error: {0}")]
    Media(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl DeckError {
    /// Create an index out of bounds error
    pub fn out_of_bounds(collection: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            collection,
            index,
            len,
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_collection() {
        let err = DeckError::out_of_bounds("playlist", 4, 2);
        assert_eq!(err.to_string(), "playlist index out of bounds: 4 (len 2)");
    }

    #[test]
    fn storage_helper_wraps_message() {
        let err = DeckError::storage("disk full");
        assert!(matches!(err, DeckError::Storage(ref m) if m == "disk full"));
    }
}
