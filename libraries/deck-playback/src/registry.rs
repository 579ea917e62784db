//! Media handle registry
//!
//! Turns the files a user picked into track entities: a playable handle plus
//! placeholder display metadata. Only audio files are accepted.

use deck_core::{FileMedia, MediaRef, MediaSource, TrackEntry, TrackMetadata};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// File extensions accepted when the picker supplies no MIME type
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "aac", "aif", "aiff", "alac", "flac", "m4a", "mp3", "oga", "ogg", "opus", "wav", "weba",
];

/// A file produced by the file-selection collaborator
pub struct SelectedFile {
    /// Playable source for the file's contents
    pub source: Box<dyn MediaSource>,

    /// File name shown to the user
    pub file_name: String,

    /// MIME type reported by the picker, if any
    pub mime_type: Option<String>,
}

impl SelectedFile {
    /// Create a selected file without a MIME type
    pub fn new(source: Box<dyn MediaSource>, file_name: impl Into<String>) -> Self {
        Self {
            source,
            file_name: file_name.into(),
            mime_type: None,
        }
    }

    /// Attach the MIME type reported by the picker
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Select a local file by absolute path
    pub fn local(path: impl AsRef<Path>) -> deck_core::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(Box::new(FileMedia::new(path)?), file_name))
    }

    /// Whether the file is audio
    ///
    /// A reported MIME type decides on its own; otherwise the extension does.
    pub fn is_audio(&self) -> bool {
        match self.mime_type.as_deref() {
            Some(mime) => mime
                .get(..6)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("audio/")),
            None => Path::new(&self.file_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    AUDIO_EXTENSIONS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
                }),
        }
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("uri", &self.source.uri())
            .finish()
    }
}

/// Wraps selected files into track entities
#[derive(Debug, Clone)]
pub struct MediaRegistry {
    placeholder: String,
}

impl MediaRegistry {
    /// Create a registry that fills singer and duration with `placeholder`
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    /// Register the audio files among `files`, preserving their order
    ///
    /// Non-audio files are skipped and their sources released.
    pub fn register(&self, files: impl IntoIterator<Item = SelectedFile>) -> Vec<TrackEntry> {
        files
            .into_iter()
            .filter_map(|mut file| {
                if !file.is_audio() {
                    debug!(file = %file.file_name, mime = ?file.mime_type, "Skipping non-audio file");
                    file.source.release();
                    return None;
                }
                let metadata = TrackMetadata::with_placeholder(file.file_name, &self.placeholder);
                Some(TrackEntry::new(MediaRef::new(file.source), metadata))
            })
            .collect()
    }
}

impl Default for MediaRegistry {
    fn default() -> Self {
        Self::new(deck_core::UNKNOWN_METADATA)
    }
}
