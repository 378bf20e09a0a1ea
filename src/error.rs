//! Error taxonomy for generation and history storage.

use thiserror::Error;

/// Message shown to the user for any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate itinerary. The AI model might be busy. Please try again.";

/// Why a generation attempt failed.
///
/// The three kinds are kept apart for logging and tests; users see the same
/// message for all of them (see [`GenerationError::user_message`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The generative service could not be reached, was unavailable, or
    /// returned nothing.
    #[error("generation failed: {0}")]
    Generation(String),
    /// The response was not valid JSON.
    #[error("response is not valid JSON: {0}")]
    Parse(String),
    /// The response decoded but does not have the required shape.
    #[error("response violates the itinerary schema: {0}")]
    SchemaViolation(String),
}

impl GenerationError {
    /// Short machine-readable kind, used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Generation(_) => "generation_failure",
            GenerationError::Parse(_) => "parse_failure",
            GenerationError::SchemaViolation(_) => "schema_violation",
        }
    }

    /// The generic message presented to users.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}

/// A failure at the persistent storage boundary.
///
/// These never leave the history store; they are logged and masked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Reading or decoding the stored history failed.
    #[error("failed to read history: {0}")]
    Read(String),
    /// Encoding or writing the history failed.
    #[error("failed to write history: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_generation_failures_share_user_message() {
        let errors = [
            GenerationError::Generation("timeout".into()),
            GenerationError::Parse("eof".into()),
            GenerationError::SchemaViolation("missing title".into()),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
        }
        assert_eq!(errors[0].kind(), "generation_failure");
        assert_eq!(errors[1].kind(), "parse_failure");
        assert_eq!(errors[2].kind(), "schema_violation");
    }

    #[test]
    fn internal_messages_stay_distinct() {
        let err = GenerationError::SchemaViolation("`days` is not an array".into());
        assert!(err.to_string().contains("`days` is not an array"));
    }
}
