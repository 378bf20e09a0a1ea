//! Runtime configuration from the environment and an optional `.env` file.

use std::path::PathBuf;

use crate::adapters::live::llm::DEFAULT_GEMINI_ENDPOINT;
use crate::generate::DEFAULT_MODEL;

/// Storage directory used when `TRIPWEAVER_STORE` is unset.
pub const DEFAULT_STORE_DIR: &str = ".tripweaver";

/// `TRIPWEAVER_STORE` value selecting the in-memory store.
pub const MEMORY_STORE: &str = ":memory:";

/// Where history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Discarded when the process exits.
    Memory,
    /// One JSON file per key under this directory.
    Directory(PathBuf),
}

/// Settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gemini API key; only needed for live generation.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Base URL of the generative API.
    pub endpoint: String,
    /// History storage.
    pub store: StoreLocation,
    /// Run deep validation on every generated plan.
    pub strict: bool,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Record port interactions under this directory.
    pub record_dir: Option<PathBuf>,
    /// Serve port interactions from this cassette.
    pub replay: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store = match var("TRIPWEAVER_STORE") {
            Some(v) if v == MEMORY_STORE => StoreLocation::Memory,
            Some(v) => StoreLocation::Directory(PathBuf::from(v)),
            None => StoreLocation::Directory(PathBuf::from(DEFAULT_STORE_DIR)),
        };

        Self {
            api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            model: var("TRIPWEAVER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: var("TRIPWEAVER_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            store,
            strict: var("TRIPWEAVER_STRICT").is_some_and(|v| is_truthy(&v)),
            log_level: var("TRIPWEAVER_LOG").unwrap_or_else(|| "warn".to_string()),
            record_dir: var("TRIPWEAVER_RECORD").map(PathBuf::from),
            replay: var("TRIPWEAVER_REPLAY").map(PathBuf::from),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
