//! Collects interactions and writes them as a YAML cassette.

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use serde_json::Value;

use super::format::{Cassette, Interaction};

/// Builds one cassette in memory and writes it on [`finish`](Self::finish).
///
/// `recorded_at` is the time the recorder was created.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    cassette: Cassette,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let cassette = Cassette {
            name: name.into(),
            recorded_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            interactions: Vec::new(),
        };
        Self { path: path.into(), cassette }
    }

    /// Appends a call; its `seq` is its position in the cassette.
    pub fn record(&mut self, port: &str, method: &str, input: Value, output: Value) {
        let seq = self.cassette.interactions.len() as u64;
        self.cassette.interactions.push(Interaction {
            seq,
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cassette.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cassette.interactions.is_empty()
    }

    /// Writes the cassette, creating missing parent directories, and returns
    /// its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn finish(self) -> io::Result<PathBuf> {
        let yaml = serde_yaml::to_string(&self.cassette).map_err(io::Error::other)?;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assigns_sequence_numbers_and_writes_yaml() {
        let dir = std::env::temp_dir().join("tripweaver_recorder_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("session.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "session");
        recorder.record("kv", "get", json!({"key": "h"}), json!({"ok": null}));
        recorder.record("llm", "complete", json!({}), json!({"err": "boom"}));
        recorder.record("kv", "set", json!({"key": "h"}), json!({"ok": null}));
        assert_eq!(recorder.len(), 3);

        let written = recorder.finish().expect("finish should succeed");
        assert_eq!(written, path);

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "session");
        assert_eq!(cassette.tool_version, env!("CARGO_PKG_VERSION"));
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(cassette.interactions[1].output, json!({"err": "boom"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
