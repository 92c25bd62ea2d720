//! Login session and its persistence
//!
//! The session holds the access token of the signed-in admin. It is
//! persisted through a [`KeyValueStore`] under [`SESSION_KEY`] so that a
//! restart keeps the admin logged in.

use crate::config::project_dirs;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key the session is stored under
pub const SESSION_KEY: &str = "user";

/// Minimal string key-value persistence
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON file store in the platform data directory
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the default store, or `None` if no home directory exists
    pub fn open_default() -> Result<Option<Self>> {
        match project_dirs() {
            Some(dirs) => Self::open(dirs.data_dir().join("storage.json")).map(Some),
            None => Ok(None),
        }
    }

    pub fn open(path: PathBuf) -> Result<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.flush()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Signed-in admin, if any
pub struct Session {
    token: Option<String>,
    store: Box<dyn KeyValueStore>,
}

impl Session {
    /// Restore a session from the store
    pub fn restore(store: Box<dyn KeyValueStore>) -> Self {
        let token = store
            .get(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<StoredSession>(&raw).ok())
            .map(|stored| stored.token);
        Self { token, store }
    }

    /// Session without persistence
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::restore(Box::<MemoryStore>::default())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Set the token and persist it
    pub fn login(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        let raw = serde_json::to_string(&StoredSession {
            token: token.clone(),
        })?;
        self.token = Some(token);
        self.store.set(SESSION_KEY, &raw)
    }

    /// Clear the token in memory and in the store
    pub fn logout(&mut self) -> Result<()> {
        self.token = None;
        self.store.remove(SESSION_KEY)
    }
}
