// src/services/session_store.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::RwLock,
};

use uuid::Uuid;

use crate::error::StoreError;

/// Key under which the per-profile session id is kept.
pub const SESSION_KEY: &str = "chatbot_session_id";

/// Persistent string key-value storage, the way a browser's local storage is.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Returns the stored session id, creating and persisting one on first use.
pub fn get_or_create_session_id(store: &dyn KeyValueStore) -> Result<String, StoreError> {
    if let Some(id) = store.get(SESSION_KEY)? {
        return Ok(id);
    }
    let id = Uuid::new_v4().to_string();
    store.set(SESSION_KEY, &id)?;
    tracing::info!(session_id = %id, "created new chat session id");
    Ok(id)
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk. The whole file is rewritten on
/// every `set`.
pub struct FileStore {
    path: PathBuf,
    inner: RwLock<HashMap<String, String>>,
}

impl Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .finish()
    }
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries: HashMap<String, String> = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => HashMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(StoreError::Format)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, inner: RwLock::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let previous = guard.insert(key.to_string(), value.to_string());
        let written = serde_json::to_string_pretty(&*guard)
            .map_err(StoreError::Format)
            .and_then(|json| fs::write(&self.path, json).map_err(StoreError::from));
        if let Err(e) = written {
            // keep memory and disk in agreement
            match previous {
                Some(old) => guard.insert(key.to_string(), old),
                None => guard.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
