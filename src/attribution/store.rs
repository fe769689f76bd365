use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Session-scoped key/value storage.
///
/// Lifetime matches the browser session: nothing here survives past it, and
/// a fresh session starts empty. Hosts adapt their own storage behind this
/// trait; [`MemorySessionStore`] is the shipped implementation.
pub trait SessionStore: Send + Sync {
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    Unavailable(String),
}

impl StorageError {
    pub fn code_str(&self) -> &'static str {
        match self {
            StorageError::Unavailable(_) => "storage/unavailable",
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(reason) => {
                write!(f, "session storage unavailable: {reason} ({})", self.code_str())
            }
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
