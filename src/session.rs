use std::collections::HashMap;
use std::path::PathBuf;

use nullnet_liberror::{location, ErrorHandler, Location};

use crate::constants::{SESSION_FLAG_KEY, SESSION_FLAG_SET};

/// Synchronous local key-value storage, the persistence seam the navigation
/// guard depends on. The login flow writes the session flag through it.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// The session flag must be exactly `"true"`; any other value or its absence
/// means not authenticated.
pub fn is_authenticated<S: SessionStore>(session: &S) -> bool {
    session.get(SESSION_FLAG_KEY).as_deref() == Some(SESSION_FLAG_SET)
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Write-through store backed by a JSON file, so session state survives
/// process restarts the way browser storage survives reloads.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileSessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = if path.exists() {
            std::fs::read_to_string(&path)
                .handle_err(location!())
                .ok()
                .and_then(|content| serde_json::from_str(&content).handle_err(location!()).ok())
                .unwrap_or_default()
        } else {
            HashMap::new()
        };
        Self { path, entries }
    }

    fn persist(&self) {
        let json = serde_json::to_string(&self.entries).unwrap_or_default();
        std::fs::write(&self.path, json)
            .handle_err(location!())
            .unwrap_or_default();
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}
