//! Session persistence bridge
//!
//! Remembers the last selection in a key-value store and publishes the
//! "now playing" label.

use crate::config::{StorageKeys, TitleSettings};
use crate::error::Result;
use deck_core::{KeyValueStore, Selection, TitleSink, TrackMetadata};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persisted value meaning "no track selected"
pub const NO_TRACK: i64 = -1;

/// Selection as it is persisted
///
/// Plain integers so the stored strings stay readable by older sessions;
/// [`NO_TRACK`] encodes the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub playlist_index: i64,
    pub track_index: i64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from(Selection::default())
    }
}

impl From<Selection> for SessionState {
    fn from(selection: Selection) -> Self {
        Self {
            playlist_index: selection.playlist_index as i64,
            track_index: selection.track_index.map_or(NO_TRACK, |t| t as i64),
        }
    }
}

impl SessionState {
    /// Selection with a track, if both indices are non-negative
    pub fn track_selection(&self) -> Option<Selection> {
        let playlist = usize::try_from(self.playlist_index).ok()?;
        let track = usize::try_from(self.track_index).ok()?;
        Some(Selection::track(playlist, track))
    }
}

/// Bridges selection changes to persistence and the title surface
pub struct SessionBridge {
    store: Box<dyn KeyValueStore>,
    keys: StorageKeys,
    title: TitleSettings,
    title_sink: Box<dyn TitleSink>,
    state: SessionState,
}

impl SessionBridge {
    /// Create a bridge starting from `state`
    pub fn new(
        store: Box<dyn KeyValueStore>,
        keys: StorageKeys,
        title: TitleSettings,
        title_sink: Box<dyn TitleSink>,
        state: SessionState,
    ) -> Self {
        Self {
            store,
            keys,
            title,
            title_sink,
            state,
        }
    }

    /// State that the next [`save`](Self::save) writes
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Record the current selection
    pub fn update(&mut self, selection: Selection) {
        self.state = SessionState::from(selection);
    }

    /// Write the recorded state to the store
    pub fn save(&mut self) -> Result<()> {
        let state = self.state;
        self.store
            .set(&self.keys.track_index_key, &state.track_index.to_string())?;
        self.store
            .set(&self.keys.playlist_index_key, &state.playlist_index.to_string())?;
        debug!(?state, "Saved session");
        Ok(())
    }

    /// Read the persisted state
    ///
    /// `None` when either key is missing or does not hold an integer.
    pub fn load(&self) -> Result<Option<SessionState>> {
        let track = self.store.get(&self.keys.track_index_key)?;
        let playlist = self.store.get(&self.keys.playlist_index_key)?;

        Ok(parse_index(track.as_deref())
            .zip(parse_index(playlist.as_deref()))
            .map(|(track_index, playlist_index)| SessionState {
                playlist_index,
                track_index,
            }))
    }

    /// Label for the given track, or the idle label
    pub fn now_playing_label(&self, metadata: Option<&TrackMetadata>) -> String {
        match metadata {
            Some(metadata) => format!("{}{}", self.title.now_playing_prefix, metadata.name),
            None => self.title.idle.clone(),
        }
    }

    /// Push a label to the title surface
    pub fn publish_title(&mut self, title: &str) {
        self.title_sink.set_title(title);
    }
}

fn parse_index(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}

impl std::fmt::Debug for SessionBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBridge")
            .field("keys", &self.keys)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::NullTitleSink;
    use deck_storage::MemoryStore;

    fn bridge(store: &MemoryStore) -> SessionBridge {
        SessionBridge::new(
            Box::new(store.clone()),
            StorageKeys::default(),
            TitleSettings::default(),
            Box::new(NullTitleSink),
            SessionState::default(),
        )
    }

    #[test]
    fn sentinel_round_trips_as_minus_one() {
        let store = MemoryStore::new();
        let mut bridge = bridge(&store);
        bridge.update(Selection::playlist(1));
        bridge.save().unwrap();

        assert_eq!(store.get("lastPlayedTrackIndex").unwrap().as_deref(), Some("-1"));
        assert_eq!(store.get("lastPlayedPlaylistIndex").unwrap().as_deref(), Some("1"));
        assert_eq!(
            bridge.load().unwrap(),
            Some(SessionState {
                playlist_index: 1,
                track_index: NO_TRACK
            })
        );
        assert_eq!(bridge.load().unwrap().unwrap().track_selection(), None);
    }

    #[test]
    fn load_requires_both_integers() {
        let store = MemoryStore::with_entries([("lastPlayedTrackIndex", "2")]);
        assert_eq!(bridge(&store).load().unwrap(), None);

        let store = MemoryStore::with_entries([
            ("lastPlayedTrackIndex", "two"),
            ("lastPlayedPlaylistIndex", "1"),
        ]);
        assert_eq!(bridge(&store).load().unwrap(), None);

        let store = MemoryStore::with_entries([
            ("lastPlayedTrackIndex", " 2 "),
            ("lastPlayedPlaylistIndex", "1"),
        ]);
        assert_eq!(
            bridge(&store).load().unwrap().unwrap().track_selection(),
            Some(Selection::track(1, 2))
        );
    }

    #[test]
    fn negative_playlist_never_selects() {
        let state = SessionState {
            playlist_index: -3,
            track_index: 0,
        };
        assert_eq!(state.track_selection(), None);
    }

    #[test]
    fn labels_follow_title_settings() {
        let store = MemoryStore::new();
        let bridge = bridge(&store);

        assert_eq!(bridge.now_playing_label(None), "Music Player");
        assert_eq!(
            bridge.now_playing_label(Some(&TrackMetadata::new("song.mp3"))),
            "Now Playing: song.mp3"
        );
    }
}
