//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{FileKeyValueStore, GeminiClient};
use crate::adapters::memory::MemoryKeyValueStore;
use crate::adapters::recording::{RecordingGenerativeClient, RecordingKeyValueStore};
use crate::adapters::replaying::{ReplayingGenerativeClient, ReplayingKeyValueStore};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::config::{Config, StoreLocation};
use crate::history::HistoryStore;
use crate::ports::{CompletionFuture, CompletionRequest, GenerativeClient, KeyValueStore, PortError};

/// The two external boundaries: the generative model and key-value storage.
///
/// Constructors wire up live, recording, or replaying adapters.
#[derive(Clone)]
pub struct ServiceContext {
    /// Generative model client.
    pub llm: Arc<dyn GenerativeClient>,
    /// Persistent key-value storage.
    pub storage: Arc<dyn KeyValueStore>,
}

impl ServiceContext {
    /// Live adapters chosen by `config`.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        let llm: Arc<dyn GenerativeClient> =
            Arc::new(GeminiClient::new(config.endpoint.clone(), config.api_key.clone()));
        let storage: Arc<dyn KeyValueStore> = match &config.store {
            StoreLocation::Memory => Arc::new(MemoryKeyValueStore::new()),
            StoreLocation::Directory(dir) => Arc::new(FileKeyValueStore::new(dir.clone())),
        };
        Self { llm, storage }
    }

    /// Live adapters wrapped so every call is written to `session`.
    #[must_use]
    pub fn recording(config: &Config, session: &RecordingSession) -> Self {
        let live = Self::live(config);
        Self {
            llm: Arc::new(RecordingGenerativeClient::new(live.llm, Arc::clone(&session.llm))),
            storage: Arc::new(RecordingKeyValueStore::new(live.storage, Arc::clone(&session.kv))),
        }
    }

    /// Replays both ports from one cassette file.
    ///
    /// Each port gets its own cursor into the cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Self::replaying_from(&CassetteConfig::monolithic(path))
    }

    /// Replays each port from its own cassette.
    ///
    /// Ports without a cassette panic with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            llm: match replayers.llm {
                Some(r) => Arc::new(ReplayingGenerativeClient::new(r)),
                None => Arc::new(UnconfiguredGenerativeClient),
            },
            storage: match replayers.kv {
                Some(r) => Arc::new(ReplayingKeyValueStore::new(r)),
                None => Arc::new(UnconfiguredKeyValueStore),
            },
        })
    }

    /// History kept in this context's storage.
    #[must_use]
    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(Arc::clone(&self.storage))
    }
}

struct UnconfiguredGenerativeClient;

impl GenerativeClient for UnconfiguredGenerativeClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        panic!("GenerativeClient port not configured in CassetteConfig: no cassette loaded for llm");
    }
}

struct UnconfiguredKeyValueStore;

impl KeyValueStore for UnconfiguredKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PortError> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for kv");
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PortError> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for kv");
    }
}
