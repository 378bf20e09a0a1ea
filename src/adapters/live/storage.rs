//! Live key-value adapter storing one file per key under a directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::storage::KeyValueStore;
use crate::ports::PortError;

/// File-backed key-value store: `<root>/<key>.json`.
///
/// Writes go to a staging file that is then renamed over the blob, so an
/// interrupted write leaves the previous blob intact.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the blobs.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PortError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(format!("invalid storage key {key:?}").into());
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("failed to read {}: {e}", path.display()).into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;
        // Keys never start with '.', so the staging file cannot shadow one.
        let staging = self.root.join(format!(".{key}.json.tmp"));
        std::fs::write(&staging, value)
            .and_then(|()| std::fs::rename(&staging, &path))
            .map_err(|e| -> PortError {
                let _ = std::fs::remove_file(&staging);
                format!("failed to write {}: {e}", path.display()).into()
            })
    }
}
