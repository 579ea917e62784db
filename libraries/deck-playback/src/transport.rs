//! Transport controller
//!
//! Issues play/pause to the external audio player and mirrors its state.
//!
//! The player's own notifications are the source of truth for `is_playing`.
//! After a local command the controller reads the player's paused flag back
//! instead of guessing, so a notification for the same command that arrives
//! later sets the same value and never flips the state twice.

use crate::error::{PlaybackError, Result};
use deck_core::{AudioPlayer, MediaId, MediaRef, PlayerNotification};
use tracing::{debug, trace, warn};

/// Play/pause control over an [`AudioPlayer`]
pub struct TransportController {
    player: Box<dyn AudioPlayer>,
    is_playing: bool,
    loaded: Option<MediaId>,
}

impl TransportController {
    /// Wrap a player; nothing is loaded and nothing plays
    pub fn new(player: Box<dyn AudioPlayer>) -> Self {
        Self {
            player,
            is_playing: false,
            loaded: None,
        }
    }

    /// Whether audio is playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Handle of the currently loaded media
    pub fn loaded(&self) -> Option<&MediaId> {
        self.loaded.as_ref()
    }

    /// Label for the play/pause control
    pub fn play_pause_label(&self) -> &'static str {
        if self.is_playing {
            "Pause"
        } else {
            "Play"
        }
    }

    /// Point the player at `media`, or unload it with `None`
    ///
    /// Reloading the media that is already loaded does nothing, so a selection
    /// shift that keeps the same track keeps playing. A fresh load is paused.
    /// Returns `true` when the playing state changed.
    ///
    /// When the player rejects `media` it is paused and unloaded, so the
    /// previous source can no longer be played.
    pub fn load(&mut self, media: Option<&MediaRef>) -> Result<bool> {
        let next = media.map(|m| m.id().clone());
        if next == self.loaded {
            return Ok(false);
        }

        debug!(media = ?next, "Loading player source");
        if let Err(e) = self.player.load(media) {
            self.discard_source();
            return Err(PlaybackError::Player(e.to_string()));
        }
        self.loaded = next;
        Ok(self.set_playing(false))
    }

    fn discard_source(&mut self) {
        if !self.player.is_paused() {
            self.player.pause();
        }
        if self.loaded.is_some() {
            if let Err(e) = self.player.load(None) {
                warn!(error = %e, "Failed to unload player source");
            }
        }
        self.loaded = None;
        self.is_playing = false;
    }

    /// Toggle between playing and paused
    ///
    /// Does nothing while no source is loaded. Returns `true` when the
    /// playing state changed.
    pub fn toggle(&mut self) -> Result<bool> {
        if self.loaded.is_none() {
            return Ok(false);
        }
        if self.player.is_paused() {
            self.player
                .play()
                .map_err(|e| PlaybackError::Player(e.to_string()))?;
        } else {
            self.player.pause();
        }
        let playing = !self.player.is_paused();
        Ok(self.set_playing(playing))
    }

    /// Start playback if the player is paused
    ///
    /// Does nothing while no source is loaded.
    pub fn play(&mut self) -> Result<bool> {
        if self.loaded.is_none() {
            return Ok(false);
        }
        if self.player.is_paused() {
            self.player
                .play()
                .map_err(|e| PlaybackError::Player(e.to_string()))?;
        }
        let playing = !self.player.is_paused();
        Ok(self.set_playing(playing))
    }

    /// Pause the player if it is running
    ///
    /// Returns `true` when the playing state changed.
    pub fn pause_if_playing(&mut self) -> bool {
        if !self.player.is_paused() {
            self.player.pause();
        }
        self.set_playing(false)
    }

    /// Apply a notification raised by the player
    ///
    /// Returns `true` when the playing state changed.
    pub fn handle_notification(&mut self, notification: PlayerNotification) -> bool {
        trace!(?notification, "Player notification");
        match notification {
            PlayerNotification::Play => self.set_playing(true),
            PlayerNotification::Pause | PlayerNotification::Ended => self.set_playing(false),
        }
    }

    fn set_playing(&mut self, playing: bool) -> bool {
        let changed = self.is_playing != playing;
        self.is_playing = playing;
        changed
    }
}

impl std::fmt::Debug for TransportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportController")
            .field("is_playing", &self.is_playing)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{DeckError, MediaSource};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct PlayerState {
        paused: bool,
        reject_media: bool,
        loads: Vec<Option<String>>,
    }

    struct FakePlayer(Arc<Mutex<PlayerState>>);

    impl AudioPlayer for FakePlayer {
        fn load(&mut self, media: Option<&MediaRef>) -> deck_core::Result<()> {
            let mut state = self.0.lock().unwrap();
            if state.reject_media && media.is_some() {
                return Err(DeckError::media("unsupported codec"));
            }
            state.paused = true;
            state.loads.push(media.map(|m| m.uri().to_string()));
            Ok(())
        }

        fn play(&mut self) -> deck_core::Result<()> {
            self.0.lock().unwrap().paused = false;
            Ok(())
        }

        fn pause(&mut self) {
            self.0.lock().unwrap().paused = true;
        }

        fn is_paused(&self) -> bool {
            self.0.lock().unwrap().paused
        }
    }

    struct Blob(&'static str);

    impl MediaSource for Blob {
        fn uri(&self) -> &str {
            self.0
        }
    }

    fn controller() -> (TransportController, Arc<Mutex<PlayerState>>) {
        let state = Arc::new(Mutex::new(PlayerState {
            paused: true,
            ..PlayerState::default()
        }));
        (
            TransportController::new(Box::new(FakePlayer(Arc::clone(&state)))),
            state,
        )
    }

    fn loaded_controller() -> (TransportController, Arc<Mutex<PlayerState>>) {
        let (mut transport, state) = controller();
        let media = MediaRef::new(Box::new(Blob("blob:a")));
        transport.load(Some(&media)).unwrap();
        (transport, state)
    }

    #[test]
    fn toggle_reads_state_back_from_player() {
        let (mut transport, state) = loaded_controller();

        assert!(transport.toggle().unwrap());
        assert!(transport.is_playing());
        assert!(!state.lock().unwrap().paused);
        assert_eq!(transport.play_pause_label(), "Pause");

        assert!(transport.toggle().unwrap());
        assert!(!transport.is_playing());
        assert_eq!(transport.play_pause_label(), "Play");
    }

    #[test]
    fn toggle_without_source_does_nothing() {
        let (mut transport, state) = controller();

        assert!(!transport.toggle().unwrap());
        assert!(!transport.play().unwrap());
        assert!(!transport.is_playing());
        assert!(state.lock().unwrap().paused);
    }

    #[test]
    fn late_notification_is_idempotent() {
        let (mut transport, _state) = loaded_controller();

        transport.toggle().unwrap();
        assert!(!transport.handle_notification(PlayerNotification::Play));
        assert!(transport.is_playing());
    }

    #[test]
    fn notifications_from_native_controls_win() {
        let (mut transport, _state) = loaded_controller();

        assert!(transport.handle_notification(PlayerNotification::Play));
        assert!(transport.is_playing());
        assert!(transport.handle_notification(PlayerNotification::Pause));
        assert!(!transport.is_playing());
        transport.handle_notification(PlayerNotification::Play);
        assert!(transport.handle_notification(PlayerNotification::Ended));
        assert!(!transport.is_playing());
    }

    #[test]
    fn load_skips_same_media() {
        let (mut transport, state) = controller();
        let media = MediaRef::new(Box::new(Blob("blob:a")));

        transport.load(Some(&media)).unwrap();
        transport.play().unwrap();
        assert!(!transport.load(Some(&media)).unwrap());
        assert!(transport.is_playing());
        assert_eq!(state.lock().unwrap().loads.len(), 1);

        assert!(transport.load(None).unwrap());
        assert!(!transport.is_playing());
        assert_eq!(
            state.lock().unwrap().loads,
            vec![Some("blob:a".to_string()), None]
        );
    }

    #[test]
    fn rejected_load_unloads_previous_source() {
        let (mut transport, state) = loaded_controller();
        transport.play().unwrap();

        state.lock().unwrap().reject_media = true;
        let other = MediaRef::new(Box::new(Blob("blob:b")));
        assert!(transport.load(Some(&other)).is_err());

        assert!(!transport.is_playing());
        assert!(transport.loaded().is_none());
        {
            let state = state.lock().unwrap();
            assert!(state.paused);
            assert_eq!(state.loads, vec![Some("blob:a".to_string()), None]);
        }

        assert!(!transport.toggle().unwrap());
        assert!(!transport.is_playing());
        assert!(state.lock().unwrap().paused);
    }

    #[test]
    fn pause_if_playing_stops_player() {
        let (mut transport, state) = loaded_controller();
        transport.play().unwrap();

        assert!(transport.pause_if_playing());
        assert!(state.lock().unwrap().paused);
        assert!(!transport.pause_if_playing());
    }
}
