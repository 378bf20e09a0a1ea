//! Recording adapter for the `KeyValueStore` port.

use std::sync::Arc;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::{KeyValueStore, PortError};

/// Records storage calls while delegating to an inner store.
pub struct RecordingKeyValueStore {
    inner: Arc<dyn KeyValueStore>,
    recorder: SharedRecorder,
}

impl RecordingKeyValueStore {
    /// Wraps `inner`, writing every call to `recorder`.
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct KeyInput<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetInput<'a> {
    key: &'a str,
    value: &'a str,
}

impl KeyValueStore for RecordingKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let result = self.inner.get(key);
        record_result(&self.recorder, "kv", "get", &KeyInput { key }, &result);
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        let result = self.inner.set(key, value);
        record_result(&self.recorder, "kv", "set", &SetInput { key, value }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::memory::MemoryKeyValueStore;
    use crate::cassette::recorder::CassetteRecorder;

    #[test]
    fn records_get_and_set() {
        let path = std::env::temp_dir().join("tripweaver_rec_kv.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "kv")));

        {
            let store = RecordingKeyValueStore::new(
                Arc::new(MemoryKeyValueStore::new()),
                Arc::clone(&recorder),
            );
            assert_eq!(store.get("history").unwrap(), None);
            store.set("history", "[]").unwrap();
            assert_eq!(store.get("history").unwrap().as_deref(), Some("[]"));
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        assert_eq!(recorder.len(), 3);
        recorder.finish().unwrap();

        let cassette = crate::cassette::format::Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions[0].output, serde_json::json!({"ok": null}));
        assert_eq!(cassette.interactions[1].method, "set");
        assert_eq!(cassette.interactions[2].output, serde_json::json!({"ok": "[]"}));

        let _ = std::fs::remove_file(&path);
    }
}
