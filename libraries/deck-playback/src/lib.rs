//! Deck Player - Playback Management
//!
//! Platform-agnostic playlist and playback state machine for Deck Player.
//!
//! This crate provides:
//! - Playlists sharing one arena of uploaded tracks
//! - Positional track deletion across every playlist
//! - Playlist/track selection with wrap-around navigation
//! - Play/pause transport reconciled with player notifications
//! - Session persistence of the last selection
//! - A "now playing" title and a render snapshot
//!
//! # Architecture
//!
//! `deck-playback` never touches audio hardware, files, or a UI. The audio
//! player, key-value storage, and title surface are collaborators supplied
//! through the traits in `deck-core`.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use deck_core::{AudioPlayer, MediaRef, MediaSource, PlayerNotification};
//! use deck_playback::{Collaborators, PlaybackManager, PlayerConfig, SelectedFile};
//! use deck_storage::MemoryStore;
//!
//! # struct Blob(&'static str);
//! # impl MediaSource for Blob {
//! #     fn uri(&self) -> &str { self.0 }
//! # }
//! // Platform player; here one that only remembers its paused flag
//! struct Player {
//!     paused: bool,
//! }
//!
//! impl AudioPlayer for Player {
//!     fn load(&mut self, _media: Option<&MediaRef>) -> deck_core::Result<()> {
//!         self.paused = true;
//!         Ok(())
//!     }
//!     fn play(&mut self) -> deck_core::Result<()> {
//!         self.paused = false;
//!         Ok(())
//!     }
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!     fn is_paused(&self) -> bool {
//!         self.paused
//!     }
//! }
//!
//! let collaborators = Collaborators::new(Player { paused: true }, MemoryStore::new());
//! let mut manager = PlaybackManager::new(PlayerConfig::default(), collaborators);
//!
//! manager
//!     .add_files([
//!         SelectedFile::new(Box::new(Blob("blob:1")), "intro.mp3"),
//!         SelectedFile::new(Box::new(Blob("blob:2")), "notes.txt"),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(manager.title(), "Now Playing: intro.mp3");
//!
//! manager.toggle_play_pause().unwrap();
//! assert!(manager.is_playing());
//!
//! // Native controls report back through notifications
//! manager.handle_player_notification(PlayerNotification::Pause).unwrap();
//! assert!(!manager.is_playing());
//! ```

mod error;
mod events;
mod manager;
mod registry;
mod selector;
mod session;
mod store;
mod transport;
mod view;

pub mod config;

// Public exports
pub use config::{PlayerConfig, StorageKeys, TitleSettings};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use manager::{Collaborators, PlaybackManager};
pub use registry::{MediaRegistry, SelectedFile, AUDIO_EXTENSIONS};
pub use selector::{DeletionEffect, PlaybackSelector};
pub use session::{SessionBridge, SessionState, NO_TRACK};
pub use store::PlaylistStore;
pub use transport::TransportController;
pub use view::{PlayerView, PlaylistRow, TrackRow, EMPTY_PLAYLIST_MESSAGE};
