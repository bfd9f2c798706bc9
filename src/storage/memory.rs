//! In-memory key/value storage

use std::collections::HashMap;
use crate::error::Result;
use crate::STORAGE_KEY;
use super::Persistence;

/// String-keyed storage kept in memory
///
/// Behaves like browser local storage: any number of keys, each holding
/// one string. The store reads and writes a single key.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    key: String,
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage using the default slot key
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    /// Create empty storage using a custom slot key
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            items: HashMap::new(),
        }
    }

    /// Get the value stored under any key
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Set the value stored under any key
    pub fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    /// Remove the value stored under a key
    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }

    /// Slot key read and written by [`Persistence`]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Persistence for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.get_item(&self.key).map(str::to_string))
    }

    fn save(&mut self, data: &str) -> Result<()> {
        let key = self.key.clone();
        self.set_item(&key, data);
        Ok(())
    }
}
