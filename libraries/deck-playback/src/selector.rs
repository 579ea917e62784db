//! Playback selector
//!
//! Tracks the active playlist and the selected track, and keeps the selection
//! resolvable against the playlist store.

use crate::error::{PlaybackError, Result};
use crate::store::PlaylistStore;
use deck_core::Selection;

/// How a track deletion affected the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionEffect {
    /// Selection untouched
    Unchanged,

    /// Selected track moved down one position
    Shifted,

    /// Selected track was deleted
    Cleared,
}

/// Current playlist and track selection
#[derive(Debug, Clone, Default)]
pub struct PlaybackSelector {
    selection: Selection,
}

impl PlaybackSelector {
    /// Selector on the first playlist with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Active playlist position
    pub fn playlist_index(&self) -> usize {
        self.selection.playlist_index
    }

    /// Selected track position
    pub fn track_index(&self) -> Option<usize> {
        self.selection.track_index
    }

    /// Switch playlists; never selects a track
    pub fn select_playlist(&mut self, store: &PlaylistStore, index: usize) -> Result<()> {
        if index >= store.len() {
            return Err(PlaybackError::playlist_out_of_bounds(index, store.len()));
        }
        self.selection = Selection::playlist(index);
        Ok(())
    }

    /// Select a track in the active playlist
    pub fn select_track(&mut self, store: &PlaylistStore, index: usize) -> Result<()> {
        let len = store.track_count(self.selection.playlist_index);
        if index >= len {
            return Err(PlaybackError::track_out_of_bounds(index, len));
        }
        self.selection.track_index = Some(index);
        Ok(())
    }

    /// Position `next` would move to, wrapping past the end
    ///
    /// `None` when nothing is selected.
    pub fn peek_next(&self, store: &PlaylistStore) -> Option<usize> {
        let current = self.selection.track_index?;
        let len = store.track_count(self.selection.playlist_index);
        if len == 0 {
            return None;
        }
        Some(if current + 1 < len { current + 1 } else { 0 })
    }

    /// Position `previous` would move to, wrapping past the start
    ///
    /// `None` when nothing is selected.
    pub fn peek_previous(&self, store: &PlaylistStore) -> Option<usize> {
        let current = self.selection.track_index?;
        let len = store.track_count(self.selection.playlist_index);
        if len == 0 {
            return None;
        }
        Some(if current > 0 { current - 1 } else { len - 1 })
    }

    /// Advance one track, wrapping to the first
    pub fn next(&mut self, store: &PlaylistStore) -> Option<usize> {
        let target = self.peek_next(store)?;
        self.selection.track_index = Some(target);
        Some(target)
    }

    /// Step back one track, wrapping to the last
    pub fn previous(&mut self, store: &PlaylistStore) -> Option<usize> {
        let target = self.peek_previous(store)?;
        self.selection.track_index = Some(target);
        Some(target)
    }

    /// Select the first track if nothing is selected and the active playlist has one
    pub fn select_first_if_idle(&mut self, store: &PlaylistStore) -> bool {
        if self.selection.track_index.is_none()
            && store.track_count(self.selection.playlist_index) > 0
        {
            self.selection.track_index = Some(0);
            return true;
        }
        false
    }

    /// Adjust the selection after position `index` was deleted
    pub fn on_track_deleted(&mut self, index: usize) -> DeletionEffect {
        match self.selection.track_index {
            Some(current) if current == index => {
                self.selection.track_index = None;
                DeletionEffect::Cleared
            }
            Some(current) if current > index => {
                self.selection.track_index = Some(current - 1);
                DeletionEffect::Shifted
            }
            _ => DeletionEffect::Unchanged,
        }
    }

    /// Drop a selection that no longer resolves
    ///
    /// Returns `true` when the track selection was cleared.
    pub fn reconcile(&mut self, store: &PlaylistStore) -> bool {
        match self.selection.track_index {
            Some(current) if current >= store.track_count(self.selection.playlist_index) => {
                self.selection.track_index = None;
                true
            }
            _ => false,
        }
    }

    /// Adopt a selection that was validated against `store`
    pub fn restore(&mut self, store: &PlaylistStore, selection: Selection) -> bool {
        let resolves = selection.playlist_index < store.len()
            && selection
                .track_index
                .map_or(true, |t| store.track_at(selection.playlist_index, t).is_some());
        if resolves {
            self.selection = selection;
        }
        resolves
    }
}
