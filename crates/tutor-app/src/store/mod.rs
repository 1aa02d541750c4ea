//! Local key/value store for learner data.
//!
//! A single JSON object on disk, string keys to JSON values. Every
//! `set` rewrites the file atomically (write to `.tmp`, then rename).
//! Typed accessors for the keys the tutor uses live in [`prefs`].

pub mod prefs;


use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};
use tutor_common::StoreError;

const APP_DIR: &str = "tutor";
const STORE_FILE: &str = "store.json";

/// Platform data directory for the tutor.
///
/// - macOS: `~/Library/Application Support/tutor`
/// - Linux: `$XDG_DATA_HOME/tutor` (defaults to `~/.local/share/tutor`)
/// - Windows: `%APPDATA%\tutor`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

pub struct KeyValueStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl KeyValueStore {
    /// Open the store file inside `dir`. A missing file is an empty store.
    pub fn open_in(dir: &Path) -> Result<Self, StoreError> {
        Self::open(dir.join(STORE_FILE))
    }

    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let values = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no store at {}, starting empty", path.display());
                Map::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Read and decode the value under `key`, if present.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.values
            .get(key)
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()
            .map_err(StoreError::from)
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        self.values
            .insert(key.to_string(), serde_json::to_value(value)?);
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(io_err(&tmp_path))?;
        std::fs::rename(&tmp_path, &self.path).map_err(io_err(&self.path))?;

        debug!(path = %self.path.display(), keys = self.values.len(), "Store saved");
        Ok(())
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}
