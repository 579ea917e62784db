//! Shared mock collaborators for the playback integration tests

#![allow(dead_code)]

use deck_core::{AudioPlayer, DeckError, MediaRef, MediaSource, TitleSink};
use deck_playback::{Collaborators, PlaybackManager, PlayerConfig, PlaylistStore, SelectedFile};
use deck_storage::MemoryStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ============================================================================
// Player
// ============================================================================

/// Everything the recording player was asked to do
#[derive(Debug, Default)]
pub struct PlayerLog {
    pub paused: bool,
    /// URI of every load, `None` for unloads
    pub loads: Vec<Option<String>>,
    pub plays: usize,
    pub pauses: usize,
    pub fail_loads: bool,
}

/// Audio player that records commands; clones share the log
#[derive(Clone)]
pub struct RecordingPlayer(Arc<Mutex<PlayerLog>>);

impl RecordingPlayer {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(PlayerLog {
            paused: true,
            ..PlayerLog::default()
        })))
    }

    pub fn log(&self) -> MutexGuard<'_, PlayerLog> {
        self.0.lock().unwrap()
    }

    /// Reject every later load of a source; unloads still succeed
    pub fn fail_loads(&self) {
        self.log().fail_loads = true;
    }

    /// Simulate the user pressing the player's native play button
    pub fn start_natively(&self) {
        self.log().paused = false;
    }

    /// Simulate the current source playing to its end
    pub fn finish_natively(&self) {
        self.log().paused = true;
    }

    pub fn last_load(&self) -> Option<String> {
        self.log().loads.last().cloned().flatten()
    }
}

impl AudioPlayer for RecordingPlayer {
    fn load(&mut self, media: Option<&MediaRef>) -> deck_core::Result<()> {
        let mut log = self.log();
        if log.fail_loads && media.is_some() {
            return Err(DeckError::media("decoder unavailable"));
        }
        log.paused = true;
        log.loads.push(media.map(|m| m.uri().to_string()));
        Ok(())
    }

    fn play(&mut self) -> deck_core::Result<()> {
        let mut log = self.log();
        log.plays += 1;
        log.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        let mut log = self.log();
        log.pauses += 1;
        log.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.log().paused
    }
}

// ============================================================================
// Media and title
// ============================================================================

/// Media source that counts releases
pub struct CountingMedia {
    uri: String,
    released: Arc<AtomicUsize>,
}

impl MediaSource for CountingMedia {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn release(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Title sink keeping every label it was given
#[derive(Clone, Default)]
pub struct RecordingTitleSink(Arc<Mutex<Vec<String>>>);

impl RecordingTitleSink {
    pub fn titles(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.0.lock().unwrap().last().cloned()
    }
}

impl TitleSink for RecordingTitleSink {
    fn set_title(&mut self, title: &str) {
        self.0.lock().unwrap().push(title.to_string());
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Manager plus handles on all of its collaborators
pub struct Harness {
    pub manager: PlaybackManager,
    pub player: RecordingPlayer,
    pub storage: MemoryStore,
    pub titles: RecordingTitleSink,
    pub released: Arc<AtomicUsize>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(PlayerConfig::default(), MemoryStore::new())
    }

    pub fn with_config(config: PlayerConfig) -> Self {
        Self::with_storage(config, MemoryStore::new())
    }

    pub fn with_storage(config: PlayerConfig, storage: MemoryStore) -> Self {
        let store = PlaylistStore::with_playlists(&config.default_playlists);
        Self::with_store(config, store, storage, Arc::new(AtomicUsize::new(0)))
    }

    /// Start over a prepared store; `released` should be the counter its media use
    pub fn with_store(
        config: PlayerConfig,
        store: PlaylistStore,
        storage: MemoryStore,
        released: Arc<AtomicUsize>,
    ) -> Self {
        init_tracing();

        let player = RecordingPlayer::new();
        let titles = RecordingTitleSink::default();
        let collaborators = Collaborators::new(player.clone(), storage.clone())
            .with_title_sink(titles.clone());

        Self {
            manager: PlaybackManager::with_store(config, store, collaborators),
            player,
            storage,
            titles,
            released,
        }
    }

    /// An audio file whose release is counted by this harness
    pub fn audio(&self, name: &str) -> SelectedFile {
        audio_file(name, &self.released)
    }

    pub fn upload(&mut self, names: &[&str]) -> usize {
        let files: Vec<SelectedFile> = names.iter().map(|name| self.audio(name)).collect();
        self.manager.add_files(files).unwrap()
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

pub fn audio_file(name: &str, released: &Arc<AtomicUsize>) -> SelectedFile {
    SelectedFile::new(
        Box::new(CountingMedia {
            uri: format!("blob:{name}"),
            released: Arc::clone(released),
        }),
        name,
    )
}

/// Store with the default playlists, filled with `counts[i]` tracks each
///
/// Tracks are named `p{playlist}-t{track}.mp3`.
pub fn store_with(counts: &[usize], released: &Arc<AtomicUsize>) -> PlaylistStore {
    let config = PlayerConfig::default();
    let mut names = config.default_playlists.clone();
    while names.len() < counts.len() {
        names.push(format!("Playlist {}", names.len() + 1));
    }

    let mut store = PlaylistStore::with_playlists(&names);
    let registry = deck_playback::MediaRegistry::default();
    for (playlist, &count) in counts.iter().enumerate() {
        let files = (0..count).map(|track| audio_file(&format!("p{playlist}-t{track}.mp3"), released));
        store.add_tracks(playlist, registry.register(files)).unwrap();
    }
    store
}
