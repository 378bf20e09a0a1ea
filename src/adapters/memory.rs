//! In-memory key-value adapter.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::storage::KeyValueStore;
use crate::ports::PortError;

/// Key-value store held in process memory; contents vanish on exit.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let entries = self.entries.lock().map_err(|e| -> PortError { e.to_string().into() })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        let mut entries =
            self.entries.lock().map_err(|e| -> PortError { e.to_string().into() })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_overwrites() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }
}
