//! Generative client port for schema-constrained completions.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Boxed future type alias used by [`GenerativeClient`] to keep the trait dyn-compatible.
pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CompletionResponse, PortError>> + Send + 'a>>;

/// A schema-constrained completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model identifier (e.g. `"gemini-2.5-flash"`).
    pub model: String,
    /// Response schema the output must conform to.
    pub schema: serde_json::Value,
    /// Instruction text.
    pub instructions: String,
}

/// The raw response from a completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text, expected to be a JSON document.
    pub text: String,
    /// Number of prompt tokens consumed, when reported.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Number of completion tokens generated, when reported.
    #[serde(default)]
    pub completion_tokens: u32,
}

/// Sends completion requests to an external generative model service.
///
/// Implementations make a single attempt per call and keep no state between
/// calls.
pub trait GenerativeClient: Send + Sync {
    /// Generates a completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails (network, auth, model unavailable
    /// or overloaded) or the service returns an empty payload.
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_>;
}
