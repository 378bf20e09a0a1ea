//! Replaying adapter for the `GenerativeClient` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{CompletionFuture, CompletionRequest, GenerativeClient};

/// Serves recorded completions from a cassette.
pub struct ReplayingGenerativeClient {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGenerativeClient {
    /// Creates a client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl GenerativeClient for ReplayingGenerativeClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        let output = next_output(&self.replayer, "llm", "complete");
        Box::pin(async move { replay_result(output, "llm::complete") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn client(outputs: Vec<serde_json::Value>) -> ReplayingGenerativeClient {
        let interactions = outputs
            .into_iter()
            .enumerate()
            .map(|(i, output)| Interaction {
                seq: i as u64,
                port: "llm".into(),
                method: "complete".into(),
                input: json!({}),
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "llm".into(),
            recorded_at: Utc::now(),
            tool_version: String::new(),
            interactions,
        };
        ReplayingGenerativeClient::new(CassetteReplayer::new(&cassette))
    }

    fn request() -> CompletionRequest {
        CompletionRequest { model: "m".into(), schema: json!({}), instructions: "i".into() }
    }

    #[tokio::test]
    async fn replays_text_then_error() {
        let client = client(vec![
            json!({"ok": {"text": "{}", "prompt_tokens": 1, "completion_tokens": 2}}),
            json!({"err": "model unavailable or overloaded (503)"}),
        ]);

        let first = client.complete(&request()).await.unwrap();
        assert_eq!(first.text, "{}");

        let second = client.complete(&request()).await.unwrap_err();
        assert!(second.to_string().contains("overloaded"));
    }

    #[tokio::test]
    async fn token_counts_are_optional() {
        let client = client(vec![json!({"ok": {"text": "[]"}})]);
        let response = client.complete(&request()).await.unwrap();
        assert_eq!(response.prompt_tokens, 0);
    }
}
