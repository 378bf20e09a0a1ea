//! A recording session: one recorder per port, written to a timestamped
//! directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Shared handle to a recorder, held by a recording adapter.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Per-port recorders for one run.
pub struct RecordingSession {
    /// Recorder for generative client calls.
    pub llm: SharedRecorder,
    /// Recorder for key-value store calls.
    pub kv: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing to `<base>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(base: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| -> SharedRecorder {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self { llm: make_recorder("llm"), kv: make_recorder("kv"), output_dir })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette and returns the output directory.
    ///
    /// All recording adapters must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file cannot
    /// be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(recorder: SharedRecorder, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.llm, "llm")?;
        finish_one(self.kv, "kv")?;
        Ok(self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_cassette_per_port() {
        let base = std::env::temp_dir().join("tripweaver_session_test");
        let _ = std::fs::remove_dir_all(&base);

        let session = RecordingSession::new(&base).unwrap();
        assert!(session.output_dir().exists());

        let dir = session.finish().unwrap();
        assert!(dir.join("llm.cassette.yaml").exists());
        assert!(dir.join("kv.cassette.yaml").exists());

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn finish_fails_while_adapter_holds_recorder() {
        let base = std::env::temp_dir().join("tripweaver_session_held");
        let _ = std::fs::remove_dir_all(&base);

        let session = RecordingSession::new(&base).unwrap();
        let held = Arc::clone(&session.kv);
        let err = session.finish().unwrap_err();
        assert!(err.contains("kv still has references"));
        drop(held);

        let _ = std::fs::remove_dir_all(&base);
    }
}
