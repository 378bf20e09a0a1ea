//! Cassettes: recorded port interactions used for deterministic replay.
//!
//! A recording run wraps the live adapters and writes every `llm` and `kv`
//! call to YAML; a replaying run serves those calls back in order.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
