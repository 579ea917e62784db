//! Playback manager - core orchestration
//!
//! Coordinates the playlist store, selector, transport, and session bridge.
//! Every public method is one user intent or one player notification and runs
//! to completion; afterwards the selection always resolves and the player,
//! the persisted session, and the title all agree with it.

use crate::{
    config::PlayerConfig,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    registry::{MediaRegistry, SelectedFile},
    selector::{DeletionEffect, PlaybackSelector},
    session::{SessionBridge, SessionState},
    store::PlaylistStore,
    transport::TransportController,
    view::{PlayerView, PlaylistRow, TrackRow, EMPTY_PLAYLIST_MESSAGE},
};
use deck_core::{
    AudioPlayer, KeyValueStore, NullTitleSink, Playlist, PlayerNotification, Selection,
    TitleSink, TrackEntry,
};
use tracing::{debug, info, warn};

/// External collaborators the manager drives
pub struct Collaborators {
    /// Audio player primitive
    pub player: Box<dyn AudioPlayer>,

    /// Persistence for the last selection
    pub storage: Box<dyn KeyValueStore>,

    /// Receives the "now playing" label
    pub title_sink: Box<dyn TitleSink>,
}

impl Collaborators {
    /// Player and storage, with titles discarded
    pub fn new(
        player: impl AudioPlayer + 'static,
        storage: impl KeyValueStore + 'static,
    ) -> Self {
        Self {
            player: Box::new(player),
            storage: Box::new(storage),
            title_sink: Box::new(NullTitleSink),
        }
    }

    /// Send titles to `sink`
    pub fn with_title_sink(mut self, sink: impl TitleSink + 'static) -> Self {
        self.title_sink = Box::new(sink);
        self
    }
}

/// Central playback management
///
/// Orchestrates:
/// - Playlist store (create, rename, upload, positional delete)
/// - Selection (playlist/track, wrap-around navigation)
/// - Transport (play/pause against the external player)
/// - Session persistence and the "now playing" title
pub struct PlaybackManager {
    config: PlayerConfig,
    store: PlaylistStore,
    registry: MediaRegistry,
    selector: PlaybackSelector,
    transport: TransportController,
    session: SessionBridge,

    // Last label pushed to the title sink
    title: String,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Start a session with the configured default playlists
    pub fn new(config: PlayerConfig, collaborators: Collaborators) -> Self {
        let store = PlaylistStore::with_playlists(&config.default_playlists);
        Self::with_store(config, store, collaborators)
    }

    /// Start a session over an existing playlist store
    ///
    /// The persisted selection is restored when it still resolves in `store`.
    /// Restoring never starts playback.
    pub fn with_store(
        config: PlayerConfig,
        store: PlaylistStore,
        collaborators: Collaborators,
    ) -> Self {
        let session = SessionBridge::new(
            collaborators.storage,
            config.storage.clone(),
            config.title.clone(),
            collaborators.title_sink,
            SessionState::default(),
        );

        let mut manager = Self {
            registry: MediaRegistry::new(config.metadata_placeholder.clone()),
            config,
            store,
            selector: PlaybackSelector::new(),
            transport: TransportController::new(collaborators.player),
            session,
            title: String::new(),
            pending_events: Vec::new(),
        };
        manager.restore_session();
        manager
    }

    fn restore_session(&mut self) {
        let initial = self.selector.selection();

        match self.session.load() {
            Ok(Some(state)) => match state.track_selection() {
                Some(selection) if self.selector.restore(&self.store, selection) => {
                    info!(
                        playlist = selection.playlist_index,
                        track = ?selection.track_index,
                        "Restored last played track"
                    );
                }
                _ => debug!(?state, "Persisted selection does not resolve; starting idle"),
            },
            Ok(None) => debug!("No persisted selection"),
            Err(e) => warn!(error = %e, "Failed to read persisted selection"),
        }

        self.commit(initial, true);
    }

    // ===== Playlists =====

    /// Create a playlist; blank names are ignored
    pub fn create_playlist(&mut self, name: &str) -> Option<usize> {
        let index = self.store.create_playlist(name)?;
        self.emit_playlists_changed();
        Some(index)
    }

    /// Rename a playlist exactly as typed
    pub fn rename_playlist(&mut self, index: usize, new_name: impl Into<String>) -> Result<()> {
        self.store.rename_playlist(index, new_name)?;
        self.emit_playlists_changed();
        Ok(())
    }

    /// Switch to another playlist; the track selection is cleared
    pub fn select_playlist(&mut self, index: usize) -> Result<()> {
        let previous = self.selector.selection();
        self.selector.select_playlist(&self.store, index)?;
        debug!(index, "Selected playlist");
        self.commit(previous, false);
        Ok(())
    }

    // ===== Tracks =====

    /// Add the audio files among `files` to the active playlist
    ///
    /// Returns how many were added. When nothing was selected, the first
    /// track of the active playlist becomes selected.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) -> Result<usize> {
        self.add_files_to(self.selector.playlist_index(), files)
    }

    /// Add the audio files among `files` to a specific playlist
    pub fn add_files_to(
        &mut self,
        playlist_index: usize,
        files: impl IntoIterator<Item = SelectedFile>,
    ) -> Result<usize> {
        // Registered first so rejected handles are released either way
        let entries = self.registry.register(files);
        if playlist_index >= self.store.len() {
            return Err(PlaybackError::playlist_out_of_bounds(
                playlist_index,
                self.store.len(),
            ));
        }

        let added = entries.len();
        if added == 0 {
            return Ok(0);
        }

        let previous = self.selector.selection();
        let length = self.store.add_tracks(playlist_index, entries)?;
        self.emit_tracks_changed(playlist_index, length);

        self.selector.select_first_if_idle(&self.store);
        self.commit(previous, false);
        Ok(added)
    }

    /// Delete position `index` from every playlist
    ///
    /// Deleting the selected track clears the selection and stops playback;
    /// deleting an earlier track shifts the selection down with it.
    pub fn delete_track(&mut self, index: usize) -> Result<()> {
        let previous = self.selector.selection();
        let active = previous.playlist_index;
        let had_position = index < self.store.track_count(active);
        let lengths_before: Vec<usize> = self.store.playlists().iter().map(Playlist::len).collect();

        if self.store.delete_track(index) == 0 {
            return Err(PlaybackError::track_out_of_bounds(
                index,
                self.store.track_count(active),
            ));
        }

        for (playlist_index, before) in lengths_before.into_iter().enumerate() {
            let length = self.store.track_count(playlist_index);
            if length != before {
                self.emit_tracks_changed(playlist_index, length);
            }
        }

        if had_position && self.selector.on_track_deleted(index) == DeletionEffect::Cleared {
            debug!(index, "Deleted the selected track");
            self.stop();
        }

        self.commit(previous, false);
        Ok(())
    }

    /// Select a track of the active playlist without starting playback
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        let previous = self.selector.selection();
        self.selector.select_track(&self.store, index)?;
        debug!(index, "Selected track");
        self.commit(previous, false);
        Ok(())
    }

    // ===== Transport =====

    /// Whether transport controls are usable (a track is selected)
    pub fn transport_enabled(&self) -> bool {
        self.selector.selection().has_track()
    }

    /// Play when paused, pause when playing
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if !self.transport_enabled() {
            return Ok(());
        }
        if self.transport.toggle()? {
            self.emit_state_changed();
        }
        Ok(())
    }

    /// Skip to the next track, wrapping to the first
    ///
    /// Does nothing without a selection or when the playlist has one track.
    pub fn next(&mut self) {
        let previous = self.selector.selection();
        if self.prepare_move(self.selector.peek_next(&self.store)) {
            self.selector.next(&self.store);
            self.commit(previous, false);
        }
    }

    /// Go back one track, wrapping to the last
    pub fn previous(&mut self) {
        let previous = self.selector.selection();
        if self.prepare_move(self.selector.peek_previous(&self.store)) {
            self.selector.previous(&self.store);
            self.commit(previous, false);
        }
    }

    // Pause before switching so two sources never overlap
    fn prepare_move(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(target) if self.selector.track_index() != Some(target) => {
                if self.transport.pause_if_playing() {
                    self.emit_state_changed();
                }
                true
            }
            _ => false,
        }
    }

    /// Apply a notification raised by the audio player
    ///
    /// `Ended` advances to the next track and keeps playing when
    /// `auto_advance` is enabled.
    pub fn handle_player_notification(&mut self, notification: PlayerNotification) -> Result<()> {
        if self.transport.handle_notification(notification) {
            self.emit_state_changed();
        }

        if notification == PlayerNotification::Ended
            && self.config.auto_advance
            && self.transport_enabled()
        {
            debug!("Track ended, advancing");
            self.next();
            if self.transport.play()? {
                self.emit_state_changed();
            }
        }
        Ok(())
    }

    fn stop(&mut self) {
        if self.transport.pause_if_playing() {
            self.emit_state_changed();
        }
    }

    // ===== Consistency =====

    /// Bring the player, session, and title in line with the selection
    fn commit(&mut self, previous: Selection, force_save: bool) {
        if self.selector.reconcile(&self.store) {
            debug!("Selection no longer resolves; cleared");
            self.stop();
        }

        let selection = self.selector.selection();
        let current = selection
            .track_index
            .and_then(|t| self.store.track_at(selection.playlist_index, t));

        let was_playing = self.transport.is_playing();
        let loaded = self.transport.load(current.map(|entry| &entry.media));
        let title = self
            .session
            .now_playing_label(current.map(|entry| &entry.metadata));

        match loaded {
            Ok(true) => self.emit_state_changed(),
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "Failed to load player source");
                if was_playing != self.transport.is_playing() {
                    self.emit_state_changed();
                }
                self.emit_error(e.to_string());
            }
        }

        if selection != previous {
            self.emit_selection_changed(selection);
        }

        if selection != previous || force_save {
            self.session.update(selection);
            if let Err(e) = self.session.save() {
                warn!(error = %e, "Failed to persist selection");
                self.emit_error(e.to_string());
            }
        }

        if title != self.title || force_save {
            self.session.publish_title(&title);
            self.title.clone_from(&title);
            self.pending_events.push(PlaybackEvent::TitleChanged { title });
        }
    }

    // ===== State =====

    /// Active configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Playlist store
    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    /// All playlists in order
    pub fn playlists(&self) -> &[Playlist] {
        self.store.playlists()
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selector.selection()
    }

    /// Whether audio is playing
    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    /// Selected track entity
    pub fn current_track(&self) -> Option<&TrackEntry> {
        let selection = self.selector.selection();
        self.store
            .track_at(selection.playlist_index, selection.track_index?)
    }

    /// Current "now playing" label
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last state written to the session store
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Snapshot for rendering
    pub fn view(&self) -> PlayerView {
        let selection = self.selector.selection();

        let playlists = self
            .store
            .playlists()
            .iter()
            .enumerate()
            .map(|(index, playlist)| PlaylistRow {
                index,
                name: playlist.name.clone(),
                track_count: playlist.len(),
                active: index == selection.playlist_index,
            })
            .collect();

        let tracks: Vec<TrackRow> = self
            .store
            .tracks_of(selection.playlist_index)
            .into_iter()
            .enumerate()
            .map(|(index, entry)| TrackRow {
                index,
                name: entry.metadata.name.clone(),
                singer: entry.metadata.singer.clone(),
                duration: entry.metadata.duration.clone(),
                selected: selection.track_index == Some(index),
            })
            .collect();

        PlayerView {
            playlists,
            empty_message: tracks
                .is_empty()
                .then(|| EMPTY_PLAYLIST_MESSAGE.to_string()),
            tracks,
            transport_enabled: self.transport_enabled(),
            play_pause_label: self.transport.play_pause_label().to_string(),
            now_playing_uri: self.current_track().map(|entry| entry.media.uri().to_string()),
            title: self.title.clone(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::PlaybackStateChanged {
            is_playing: self.transport.is_playing(),
        });
    }

    fn emit_selection_changed(&mut self, selection: Selection) {
        self.pending_events.push(PlaybackEvent::SelectionChanged {
            playlist_index: selection.playlist_index,
            track_index: selection.track_index,
        });
    }

    fn emit_playlists_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::PlaylistsChanged {
            count: self.store.len(),
        });
    }

    fn emit_tracks_changed(&mut self, playlist_index: usize, length: usize) {
        self.pending_events.push(PlaybackEvent::TracksChanged {
            playlist_index,
            length,
        });
    }

    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlaybackEvent::Error { message });
    }
}

impl std::fmt::Debug for PlaybackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackManager")
            .field("selection", &self.selector.selection())
            .field("transport", &self.transport)
            .field("playlists", &self.store.len())
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
