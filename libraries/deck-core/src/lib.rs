//! Deck Player Core
//!
//! Platform-agnostic core types, collaborator traits, and error handling for
//! Deck Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `TrackEntry`, `TrackMetadata`, `MediaRef`, `Selection`
//! - **Collaborator Traits**: `AudioPlayer`, `KeyValueStore`, `MediaSource`, `TitleSink`
//! - **Error Handling**: Unified `DeckError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use deck_core::types::{MediaRef, Playlist, TrackEntry, TrackMetadata};
//! use deck_core::MediaSource;
//!
//! struct Blob(String);
//!
//! impl MediaSource for Blob {
//!     fn uri(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! let track = TrackEntry::new(
//!     MediaRef::new(Box::new(Blob("blob:1".into()))),
//!     TrackMetadata::new("intro.mp3"),
//! );
//!
//! let mut playlist = Playlist::new("Workout");
//! playlist.append([track.id.clone()]);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{DeckError, Result};
pub use traits::{AudioPlayer, KeyValueStore, MediaSource, NullTitleSink, PlayerNotification, TitleSink};

pub use types::{
    FileMedia, MediaId, MediaRef, Playlist, Selection, TrackEntry, TrackId, TrackMetadata,
    UNKNOWN_METADATA,
};
