//! # Persistence Collaborators
//!
//! A key -> JSON value store the catalog writes its last good snapshot to.
//! Values handed back by [`CatalogStore::load`] are trusted: they were written
//! by this system, so the catalog installs them without re-validation.
//!
//! - [`MemoryStore`]: process-local, for tests and embedding.
//! - [`FileStore`]: one `{key}.json` file per key in a directory, replaced
//!   atomically through a temp file in the same directory.

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Errors from a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Key contains characters that cannot be used as a file stem.
    #[error("invalid store key \"{0}\" (allowed: ASCII letters, digits, '.', '_', '-')")]
    InvalidKey(String),

    /// Filesystem failure.
    #[error("store I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stored bytes are not valid JSON.
    #[error("stored value at {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Key -> serialized-value store.
pub trait CatalogStore: Send + Sync {
    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Read the value under `key`; `Ok(None)` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Remove every stored value.
    fn clear(&self) -> Result<(), StoreError>;
}

// -- In-memory ----------------------------------------------------------------

/// Thread-safe, cloneable in-memory store.
///
/// The lock is `parking_lot` and never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl CatalogStore for MemoryStore {
    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.data.write().insert(key.to_string(), value.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.data.write().clear();
        Ok(())
    }
}

// -- File-backed --------------------------------------------------------------

/// Directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the store root. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl CatalogStore for FileStore {
    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let temp = NamedTempFile::new_in(&self.dir).map_err(io_err(&self.dir))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, value).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
            writer.flush().map_err(io_err(&path))?;
        }
        temp.persist(&path).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e.error,
        })?;
        tracing::debug!(key, path = %path.display(), "saved catalog value");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key)?;
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_err(&path)(e)),
        };
        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    fn clear(&self) -> Result<(), StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(io_err(&self.dir)(e)),
        };
        for entry in entries {
            let path = entry.map_err(io_err(&self.dir))?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                fs::remove_file(&path).map_err(io_err(&path))?;
            }
        }
        Ok(())
    }
}
