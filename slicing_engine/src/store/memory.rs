//! In-memory backend, shared between clones.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::ProgressBackend;
use crate::error::StoreError;

/// Keeps values in a map. Clones see the same map, so a test can hand one clone to
/// the engine and inspect what was persisted through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory backend lock poisoned".into()))
    }

    /// Raw stored value, bypassing the store.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().ok().and_then(|entries| entries.get(key).cloned())
    }

    /// Seed a raw value, bypassing the store.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries() {
            entries.insert(key.into(), value.into());
        }
    }
}

impl ProgressBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryBackend::new();
        let mut writer = backend.clone();
        writer.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));

        writer.remove("k").unwrap();
        assert_eq!(backend.get("k"), None);
        // Removing again is fine.
        writer.remove("k").unwrap();
    }
}
