//! JSON file backed key-value store
//!
//! The file holds a single flat JSON object of string values:
//!
//! ```json
//! {
//!   "lastPlayedPlaylistIndex": "1",
//!   "lastPlayedTrackIndex": "2"
//! }
//! ```

use crate::error::{Result, StorageError};
use deck_core::KeyValueStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistent key-value store backed by a JSON file
///
/// Entries are loaded once at open and every `set` writes the whole map back
/// to disk. A `set` that fails to write leaves the entries untouched.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty one if the file is missing
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not a flat
    /// object of strings
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            parse_entries(&path, &contents)?
        } else {
            BTreeMap::new()
        };

        debug!(path = ?path, keys = entries.len(), "Opened JSON settings store");

        Ok(Self { path, entries })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn parse_entries(path: &Path, contents: &str) -> Result<BTreeMap<String, String>> {
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let value: Value = serde_json::from_str(contents)?;
    let Value::Object(object) = value else {
        return Err(StorageError::corrupt(
            path.display().to_string(),
            "expected a JSON object",
        ));
    };

    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(StorageError::corrupt(
                path.display().to_string(),
                format!("value for {key:?} is not a string: {other}"),
            )),
        })
        .collect()
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> deck_core::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> deck_core::Result<()> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        // Memory only changes once the file holds the new value
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)?;
        self.entries = entries;
        Ok(())
    }
}
