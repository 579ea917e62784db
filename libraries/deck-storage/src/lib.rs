//! Deck Player Storage
//!
//! Key-value persistence backends used by the session bridge to remember the
//! last played playlist and track.
//!
//! # Example
//!
//! ```rust
//! use deck_core::KeyValueStore;
//! use deck_storage::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.set("lastPlayedTrackIndex", "2").unwrap();
//! assert_eq!(store.get("lastPlayedTrackIndex").unwrap().as_deref(), Some("2"));
//! ```

mod error;
mod json_file;
mod memory;

pub use error::{Result, StorageError};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
