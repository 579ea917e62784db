/// Playlist domain types
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// Identity is the playlist's position in the store; there is no separate id.
/// Track order is append-only except for explicit removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Ordered track references
    tracks: Vec<TrackId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new, empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Ordered track references
    pub fn track_ids(&self) -> &[TrackId] {
        &self.tracks
    }

    /// Track reference at `index`
    pub fn track_id(&self, index: usize) -> Option<&TrackId> {
        self.tracks.get(index)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Append track references in order
    pub fn append(&mut self, ids: impl IntoIterator<Item = TrackId>) {
        self.tracks.extend(ids);
    }

    /// Remove the reference at `index`, if present
    pub fn remove_at(&mut self, index: usize) -> Option<TrackId> {
        (index < self.tracks.len()).then(|| self.tracks.remove(index))
    }

    /// Whether the playlist references `id`
    pub fn contains(&self, id: &TrackId) -> bool {
        self.tracks.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut playlist = Playlist::new("Mix");
        playlist.append([TrackId::new("a"), TrackId::new("b")]);
        playlist.append([TrackId::new("c")]);

        let ids: Vec<_> = playlist.track_ids().iter().map(TrackId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut playlist = Playlist::new("Mix");
        playlist.append([TrackId::new("a")]);

        assert_eq!(playlist.remove_at(3), None);
        assert_eq!(playlist.remove_at(0), Some(TrackId::new("a")));
        assert!(playlist.is_empty());
    }
}
