use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{LoadError, PersistenceError, PersistenceResult};
use crate::grid::Grid;

/// Serialized form of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Side length of the grid the cells came from
    pub dimension: usize,
    /// Cell colors in row-major order
    pub cells: Vec<Color>,
    /// Seconds since the UNIX epoch when the snapshot was taken
    #[serde(default)]
    pub saved_at: u64,
    /// Version of the application that wrote the snapshot
    #[serde(default)]
    pub version: String,
}

impl Snapshot {
    pub fn new(dimension: usize, cells: Vec<Color>) -> Self {
        Self {
            dimension,
            cells,
            saved_at: timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn from_grid(grid: &Grid) -> Self {
        Self::new(grid.dimension(), grid.to_cells())
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(|e| LoadError::Corrupt(e.to_string()))?;

        if !snapshot.version.is_empty() && snapshot.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Snapshot version {} differs from current version {}",
                snapshot.version,
                env!("CARGO_PKG_VERSION")
            );
        }

        Ok(snapshot)
    }
}

fn timestamp_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// A string key-value store that snapshots are written to
pub trait SnapshotStore {
    /// Returns the stored value, or `None` if nothing was saved under `key`
    fn read(&self, key: &str) -> Result<Option<String>, LoadError>;

    fn write(&mut self, key: &str, value: String) -> PersistenceResult<()>;
}

/// In-memory store, handy for tests and for keeping a scratch copy around
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, LoadError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys must be plain file stems so nothing is written outside the store directory
    fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        let plain = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\', ':'])
            && !Path::new(key).is_absolute();
        if !plain {
            return Err(PersistenceError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SnapshotStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, LoadError> {
        let path = self
            .path_for(key)
            .map_err(|e| LoadError::Storage(e.to_string()))?;
        match fs::read_to_string(path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoadError::Storage(e.to_string())),
        }
    }

    /// Writes next to the target and renames over it, so a crash never leaves a truncated snapshot
    fn write(&mut self, key: &str, value: String) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let partial = path.with_extension("json.partial");
        fs::write(&partial, value)?;
        if let Err(e) = fs::rename(&partial, &path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }
        Ok(())
    }
}
