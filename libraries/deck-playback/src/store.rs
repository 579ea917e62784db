//! Playlist store
//!
//! Owns the ordered playlists and the arena of track entities they reference.
//!
//! ```text
//! Playlists (by position)          Track arena (insertion order)
//! ─────────────────────────        ─────────────────────────────
//! 0 "Playlist 1": [t1, t2]   ───▶  t1 { media, metadata }
//! 1 "Playlist 2": [t3]       ───▶  t2 { media, metadata }
//! 2 "Workout":    []               t3 { media, metadata }
//! ```
//!
//! Track deletion is positional across every playlist: deleting position 0
//! removes `t1` from "Playlist 1" and `t3` from "Playlist 2". An entity is
//! dropped from the arena, releasing its media handle, once no playlist
//! references it.

use crate::error::{PlaybackError, Result};
use deck_core::{Playlist, TrackEntry, TrackId, TrackMetadata};
use tracing::debug;

/// Ordered playlists plus the track arena
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
    tracks: Vec<TrackEntry>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one empty playlist per name
    pub fn with_playlists<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            playlists: names.iter().map(|n| Playlist::new(n.as_ref())).collect(),
            tracks: Vec::new(),
        }
    }

    // ===== Playlists =====

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether there are no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// All playlists in order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Playlist at `index`
    pub fn playlist(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    /// Append a new empty playlist
    ///
    /// The name is trimmed; a blank name is ignored and yields `None`.
    /// Duplicate names are allowed.
    pub fn create_playlist(&mut self, name: &str) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.playlists.push(Playlist::new(name));
        let index = self.playlists.len() - 1;
        debug!(index, name, "Created playlist");
        Some(index)
    }

    /// Replace a playlist's name as given
    ///
    /// Unlike [`create_playlist`](Self::create_playlist) the name is neither
    /// trimmed nor checked for blankness, so in-progress edits in a text field
    /// round-trip unchanged.
    pub fn rename_playlist(&mut self, index: usize, new_name: impl Into<String>) -> Result<()> {
        let len = self.playlists.len();
        let playlist = self
            .playlists
            .get_mut(index)
            .ok_or_else(|| PlaybackError::playlist_out_of_bounds(index, len))?;
        playlist.name = new_name.into();
        Ok(())
    }

    // ===== Tracks =====

    /// Append track entities to a playlist, in order
    ///
    /// Returns the playlist's new track count.
    pub fn add_tracks(&mut self, playlist_index: usize, entries: Vec<TrackEntry>) -> Result<usize> {
        let len = self.playlists.len();
        let playlist = self
            .playlists
            .get_mut(playlist_index)
            .ok_or_else(|| PlaybackError::playlist_out_of_bounds(playlist_index, len))?;

        playlist.append(entries.iter().map(|entry| entry.id.clone()));
        let count = playlist.len();
        debug!(playlist_index, added = entries.len(), count, "Added tracks");
        self.tracks.extend(entries);
        Ok(count)
    }

    /// Remove position `index` from every playlist
    ///
    /// Returns the number of playlists that had a track at that position.
    /// Entities left unreferenced are dropped from the arena.
    pub fn delete_track(&mut self, index: usize) -> usize {
        let removed: Vec<TrackId> = self
            .playlists
            .iter_mut()
            .filter_map(|playlist| playlist.remove_at(index))
            .collect();

        if removed.is_empty() {
            return 0;
        }

        let playlists = &self.playlists;
        let before = self.tracks.len();
        self.tracks.retain(|entry| {
            !removed.contains(&entry.id) || playlists.iter().any(|p| p.contains(&entry.id))
        });

        debug!(
            index,
            playlists = removed.len(),
            released = before - self.tracks.len(),
            "Deleted track position"
        );
        removed.len()
    }

    /// Number of tracks in a playlist (0 when the playlist does not exist)
    pub fn track_count(&self, playlist_index: usize) -> usize {
        self.playlist(playlist_index).map_or(0, Playlist::len)
    }

    /// Track entity at a position in a playlist
    pub fn track_at(&self, playlist_index: usize, track_index: usize) -> Option<&TrackEntry> {
        let id = self.playlist(playlist_index)?.track_id(track_index)?;
        self.track(id)
    }

    /// Track entity by id
    pub fn track(&self, id: &TrackId) -> Option<&TrackEntry> {
        self.tracks.iter().find(|entry| &entry.id == id)
    }

    /// Track entities of a playlist, in order
    pub fn tracks_of(&self, playlist_index: usize) -> Vec<&TrackEntry> {
        self.playlist(playlist_index)
            .map(|playlist| {
                playlist
                    .track_ids()
                    .iter()
                    .filter_map(|id| self.track(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Metadata of every live track, in upload order
    pub fn metadata(&self) -> impl Iterator<Item = &TrackMetadata> {
        self.tracks.iter().map(|entry| &entry.metadata)
    }

    /// Number of live track entities
    pub fn arena_len(&self) -> usize {
        self.tracks.len()
    }
}
