//! Key-value storage port for named blobs.

use super::PortError;

/// Stores string blobs under string keys.
///
/// Abstracting storage lets the history store run against disk, memory, or
/// a replayed cassette.
pub trait KeyValueStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;

    /// Stores `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn set(&self, key: &str, value: &str) -> Result<(), PortError>;
}
