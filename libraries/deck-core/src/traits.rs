/// Collaborator traits for Deck Player
///
/// The playback core never decodes audio, reads files, or touches a real
/// storage backend. Hosts provide these collaborators instead.
use crate::error::Result;
use crate::types::MediaRef;
use serde::{Deserialize, Serialize};

/// Playable media behind a [`MediaRef`]
///
/// Implementers are typically a blob URL, an object URL, or a local file.
pub trait MediaSource: Send {
    /// URI the audio player loads
    fn uri(&self) -> &str;

    /// Free the underlying resource
    ///
    /// Called exactly once by [`MediaRef`] when the handle is dropped.
    fn release(&mut self) {}
}

/// External audio player primitive
///
/// The player owns decoding, buffering, and output. It reports its own state
/// changes back through [`PlayerNotification`]s, including changes triggered
/// from its native controls.
pub trait AudioPlayer: Send {
    /// Replace the current source, or unload with `None`
    ///
    /// A freshly loaded source is paused.
    fn load(&mut self, media: Option<&MediaRef>) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Whether the player is currently paused
    fn is_paused(&self) -> bool;
}

/// Notifications raised by the audio player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerNotification {
    /// Playback started or resumed
    Play,

    /// Playback paused
    Pause,

    /// The current source played to its end
    Ended,
}

/// Simple string key-value persistence
pub trait KeyValueStore: Send {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Surface that displays the "now playing" label (e.g. a window title)
pub trait TitleSink: Send {
    /// Replace the displayed title
    fn set_title(&mut self, title: &str);
}

/// Title sink that discards every label
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTitleSink;

impl TitleSink for NullTitleSink {
    fn set_title(&mut self, _title: &str) {}
}
