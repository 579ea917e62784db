/// Domain types for Deck Player
mod ids;
mod media;
mod playlist;
mod selection;
mod track;

pub use ids::{MediaId, TrackId};
pub use media::{FileMedia, MediaRef};
pub use playlist::Playlist;
pub use selection::Selection;
pub use track::{TrackEntry, TrackMetadata, UNKNOWN_METADATA};
