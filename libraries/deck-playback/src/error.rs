//! Error types for playback management

use deck_core::DeckError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Index does not resolve inside the addressed collection
    #[error("{collection} index out of bounds: {index} (len {len})")]
    IndexOutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// Audio player rejected a command
    #[error("Audio player error: {0}")]
    Player(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by a core collaborator
    #[error(transparent)]
    Core(#[from] DeckError),
}

impl PlaybackError {
    pub(crate) fn playlist_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            collection: "playlist",
            index,
            len,
        }
    }

    pub(crate) fn track_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            collection: "track",
            index,
            len,
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
