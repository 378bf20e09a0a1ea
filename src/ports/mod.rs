//! Port traits defining external boundaries.
//!
//! Each trait is a boundary between the itinerary pipeline and an external
//! system (the generative model service, the persistent key-value store).
//! Implementations live in `src/adapters/`.

pub mod llm;
pub mod storage;

pub use llm::{CompletionFuture, CompletionRequest, CompletionResponse, GenerativeClient};
pub use storage::KeyValueStore;

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
