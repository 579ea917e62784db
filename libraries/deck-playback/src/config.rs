//! Player configuration

use crate::error::{PlaybackError, Result};
use deck_core::UNKNOWN_METADATA;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the playback manager
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Playlists created at startup (default: "Playlist 1", "Playlist 2")
    #[serde(default = "default_playlists")]
    pub default_playlists: Vec<String>,

    #[serde(default)]
    pub storage: StorageKeys,

    #[serde(default)]
    pub title: TitleSettings,

    /// Text used for singer and duration (default: "Unknown")
    #[serde(default = "default_metadata_placeholder")]
    pub metadata_placeholder: String,

    /// Advance and keep playing when a track ends (default: true)
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
}

/// Keys under which the last selection is persisted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageKeys {
    #[serde(default = "default_track_index_key")]
    pub track_index_key: String,

    #[serde(default = "default_playlist_index_key")]
    pub playlist_index_key: String,
}

/// "Now playing" label settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TitleSettings {
    /// Label shown while nothing is selected
    #[serde(default = "default_idle_title")]
    pub idle: String,

    /// Prefix placed before the selected track's name
    #[serde(default = "default_now_playing_prefix")]
    pub now_playing_prefix: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_playlists: default_playlists(),
            storage: StorageKeys::default(),
            title: TitleSettings::default(),
            metadata_placeholder: default_metadata_placeholder(),
            auto_advance: default_auto_advance(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            track_index_key: default_track_index_key(),
            playlist_index_key: default_playlist_index_key(),
        }
    }
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            idle: default_idle_title(),
            now_playing_prefix: default_now_playing_prefix(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables use the `DECK_` prefix with `__` between nested
    /// keys, e.g. `DECK_STORAGE__TRACK_INDEX_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                settings = settings.add_source(config::File::from(path));
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("DECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| PlaybackError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlaybackError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_playlists.is_empty() {
            return Err(PlaybackError::Config(
                "at least one default playlist is required".to_string(),
            ));
        }

        if self.default_playlists.iter().any(|name| name.trim().is_empty()) {
            return Err(PlaybackError::Config(
                "default playlist names must not be blank".to_string(),
            ));
        }

        let keys = &self.storage;
        if keys.track_index_key.is_empty() || keys.playlist_index_key.is_empty() {
            return Err(PlaybackError::Config(
                "storage keys must not be empty".to_string(),
            ));
        }

        if keys.track_index_key == keys.playlist_index_key {
            return Err(PlaybackError::Config(format!(
                "track and playlist index share the storage key {:?}",
                keys.track_index_key
            )));
        }

        Ok(())
    }
}

// Default values
fn default_playlists() -> Vec<String> {
    vec!["Playlist 1".to_string(), "Playlist 2".to_string()]
}

fn default_track_index_key() -> String {
    "lastPlayedTrackIndex".to_string()
}

fn default_playlist_index_key() -> String {
    "lastPlayedPlaylistIndex".to_string()
}

fn default_idle_title() -> String {
    "Music Player".to_string()
}

fn default_now_playing_prefix() -> String {
    "Now Playing: ".to_string()
}

fn default_metadata_placeholder() -> String {
    UNKNOWN_METADATA.to_string()
}

fn default_auto_advance() -> bool {
    true
}
