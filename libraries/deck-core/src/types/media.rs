/// Media handle types
use crate::error::{DeckError, Result};
use crate::traits::MediaSource;
use crate::types::MediaId;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Opaque, revocable handle to playable audio
///
/// Owns its underlying [`MediaSource`] and releases it exactly once, when the
/// handle is dropped. Handles are not `Clone`: the track entity that owns a
/// handle decides when the media goes away.
pub struct MediaRef {
    id: MediaId,
    source: Box<dyn MediaSource>,
}

impl MediaRef {
    /// Wrap a media source in a fresh handle
    pub fn new(source: Box<dyn MediaSource>) -> Self {
        Self {
            id: MediaId::generate(),
            source,
        }
    }

    /// Handle identifier
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    /// Playable URI handed to the audio player
    pub fn uri(&self) -> &str {
        self.source.uri()
    }
}

impl Drop for MediaRef {
    fn drop(&mut self) {
        self.source.release();
    }
}

impl fmt::Debug for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaRef")
            .field("id", &self.id)
            .field("uri", &self.source.uri())
            .finish()
    }
}

/// Media source backed by a local file
///
/// Nothing is held open, so releasing is a no-op.
#[derive(Debug, Clone)]
pub struct FileMedia {
    path: PathBuf,
    uri: String,
}

impl FileMedia {
    /// Create a file media source from an absolute path
    ///
    /// # Errors
    /// Returns an error if the path is relative or cannot be expressed as a `file://` URL
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let uri = Url::from_file_path(path)
            .map_err(|()| DeckError::media(format!("not an absolute file path: {}", path.display())))?
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            uri,
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MediaSource for FileMedia {
    fn uri(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        released: Arc<AtomicUsize>,
    }

    impl MediaSource for CountingSource {
        fn uri(&self) -> &str {
            "blob:counting"
        }

        fn release(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn dropping_handle_releases_source_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let handle = MediaRef::new(Box::new(CountingSource {
            released: Arc::clone(&released),
        }));
        assert_eq!(handle.uri(), "blob:counting");
        assert_eq!(released.load(Ordering::SeqCst), 0);

        drop(handle);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[cfg(unix)]
    #[test]
    fn file_media_builds_file_uri() {
        let media = FileMedia::new("/music/My Song.mp3").unwrap();
        assert_eq!(media.uri(), "file:///music/My%20Song.mp3");
        assert_eq!(media.path(), Path::new("/music/My Song.mp3"));
    }

    #[test]
    fn file_media_rejects_relative_paths() {
        let err = FileMedia::new("relative/song.mp3").unwrap_err();
        assert!(matches!(err, DeckError::Media(_)));
    }
}
