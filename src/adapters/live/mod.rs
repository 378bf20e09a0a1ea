//! Live adapters for real external interactions.

pub mod llm;
pub mod storage;

pub use llm::GeminiClient;
pub use storage::FileKeyValueStore;
