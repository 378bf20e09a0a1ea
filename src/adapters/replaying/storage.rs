//! Replaying adapter for the `KeyValueStore` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{KeyValueStore, PortError};

/// Serves recorded storage calls from a cassette.
pub struct ReplayingKeyValueStore {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingKeyValueStore {
    /// Creates a store backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl KeyValueStore for ReplayingKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PortError> {
        replay_result(next_output(&self.replayer, "kv", "get"), "kv::get")
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "kv", "set"), "kv::set")
    }
}
