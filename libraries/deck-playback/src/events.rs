//! Playback Events
//!
//! Event-based communication for UI synchronization.
//! Events are emitted at key points:
//! - Selection changes (playlist or track)
//! - Playback state changes (playing/paused)
//! - Playlist collection and track list changes
//! - "Now playing" title updates

use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Selected playlist or track changed
    SelectionChanged {
        /// Active playlist position
        playlist_index: usize,
        /// Selected track position (`None` = nothing selected)
        track_index: Option<usize>,
    },

    /// Playback started or stopped
    PlaybackStateChanged {
        /// Whether audio is playing
        is_playing: bool,
    },

    /// A playlist was created or renamed
    PlaylistsChanged {
        /// Number of playlists
        count: usize,
    },

    /// Tracks were added to or removed from a playlist
    TracksChanged {
        /// Affected playlist
        playlist_index: usize,
        /// New track count
        length: usize,
    },

    /// "Now playing" label changed
    TitleChanged {
        /// New label
        title: String,
    },

    /// A collaborator failed; state degraded instead of erroring
    Error {
        /// Error message
        message: String,
    },
}
