//! Read-only snapshot for the rendering layer

use serde::{Deserialize, Serialize};

/// Message shown when the active playlist has no tracks
pub const EMPTY_PLAYLIST_MESSAGE: &str = "No tracks available";

/// Everything a UI needs to draw the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub playlists: Vec<PlaylistRow>,

    /// Rows of the active playlist
    pub tracks: Vec<TrackRow>,

    /// Shown instead of `tracks` when the active playlist is empty
    pub empty_message: Option<String>,

    /// Prev / play-pause / next are usable
    pub transport_enabled: bool,

    pub play_pause_label: String,

    /// Source the player element should render, if any
    pub now_playing_uri: Option<String>,

    pub title: String,
}

/// One playlist in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRow {
    pub index: usize,
    pub name: String,
    pub track_count: usize,
    pub active: bool,
}

/// One track of the active playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRow {
    pub index: usize,
    pub name: String,
    pub singer: String,
    pub duration: String,
    pub selected: bool,
}
