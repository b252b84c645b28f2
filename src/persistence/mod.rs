//! Save/load of the serialized game state
//!
//! The engine only sees [`PersistentStore`]: load a JSON payload if one
//! exists, save a new one after every change. Backends:
//! - [`MemoryStore`]: in-process slot (tests, guest sessions)
//! - [`FileStore`]: JSON file on disk, written via tmp + rename
//! - `LocalStorageStore` (wasm only, in `platform::web`)

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Errors a storage backend can report on save
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Failed to write save file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize game state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage rejected the write: {0}")]
    Rejected(String),
}

/// Key-value slot holding the serialized game state
pub trait PersistentStore {
    /// Saved payload, or None if nothing has been saved yet
    fn load(&self) -> Option<String>;

    /// Replace the saved payload
    fn save(&mut self, payload: &str) -> Result<(), StoreError>;
}

/// In-memory store
///
/// Clones share one slot, so a test can keep a handle and inspect what
/// the engine wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(payload.into()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PersistentStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.contents()
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl PersistentStore for FileStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Some(json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read save file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // Write beside the target first so a crash never leaves half a save
        let tmp = self.tmp_path();
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
