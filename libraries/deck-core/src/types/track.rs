/// Track domain types
use crate::types::{MediaRef, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown for metadata that is never read from the file
pub const UNKNOWN_METADATA: &str = "Unknown";

/// Display metadata for a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Display name (the selected file's name)
    pub name: String,

    /// Singer, always a placeholder
    pub singer: String,

    /// Duration, always a placeholder
    pub duration: String,
}

impl TrackMetadata {
    /// Metadata with the default placeholder for singer and duration
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_placeholder(name, UNKNOWN_METADATA)
    }

    /// Metadata with a custom placeholder for singer and duration
    pub fn with_placeholder(name: impl Into<String>, placeholder: &str) -> Self {
        Self {
            name: name.into(),
            singer: placeholder.to_string(),
            duration: placeholder.to_string(),
        }
    }
}

/// Track entity
///
/// One uploaded file: the playable handle plus its display metadata. The
/// entity exclusively owns its media handle.
#[derive(Debug)]
pub struct TrackEntry {
    /// Unique track identifier
    pub id: TrackId,

    /// Playable media handle
    pub media: MediaRef,

    /// Display metadata
    pub metadata: TrackMetadata,

    /// When the track was uploaded
    pub added_at: DateTime<Utc>,
}

impl TrackEntry {
    /// Create a new track entity
    pub fn new(media: MediaRef, metadata: TrackMetadata) -> Self {
        Self {
            id: TrackId::generate(),
            media,
            metadata,
            added_at: Utc::now(),
        }
    }
}
