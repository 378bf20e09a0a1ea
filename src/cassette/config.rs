//! Per-port cassette selection for replay.

use std::path::PathBuf;

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Cassette file per port. Ports left as `None` are not replayed.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette serving the generative client.
    pub llm: Option<PathBuf>,
    /// Cassette serving the key-value store.
    pub kv: Option<PathBuf>,
}

/// Loaded replayers, one per configured port.
pub struct PortReplayers {
    /// Replayer for the generative client.
    pub llm: Option<CassetteReplayer>,
    /// Replayer for the key-value store.
    pub kv: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Uses the same cassette for every port.
    #[must_use]
    pub fn monolithic(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self { llm: Some(path.clone()), kv: Some(path) }
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &PathBuf| Cassette::load(path).map(|c| CassetteReplayer::new(&c));
        Ok(PortReplayers {
            llm: self.llm.as_ref().map(load).transpose()?,
            kv: self.kv.as_ref().map(load).transpose()?,
        })
    }
}
