/// Selection state
use serde::{Deserialize, Serialize};

/// Current playlist and (optionally) current track
///
/// `track_index == None` is the "nothing selected" sentinel. Whoever owns a
/// `Selection` keeps `track_index` resolvable inside the playlist at
/// `playlist_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Active playlist position
    pub playlist_index: usize,

    /// Selected track position inside the active playlist
    pub track_index: Option<usize>,
}

impl Selection {
    /// Playlist selected, no track
    pub fn playlist(playlist_index: usize) -> Self {
        Self {
            playlist_index,
            track_index: None,
        }
    }

    /// Playlist and track selected
    pub fn track(playlist_index: usize, track_index: usize) -> Self {
        Self {
            playlist_index,
            track_index: Some(track_index),
        }
    }

    /// Whether a track is selected
    pub fn has_track(&self) -> bool {
        self.track_index.is_some()
    }
}
