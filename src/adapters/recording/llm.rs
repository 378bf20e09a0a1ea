//! Recording adapter for the `GenerativeClient` port.

use std::sync::Arc;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::{CompletionFuture, CompletionRequest, GenerativeClient};

/// Records completions while delegating to an inner client.
pub struct RecordingGenerativeClient {
    inner: Arc<dyn GenerativeClient>,
    recorder: SharedRecorder,
}

impl RecordingGenerativeClient {
    /// Wraps `inner`, writing every call to `recorder`.
    #[must_use]
    pub fn new(inner: Arc<dyn GenerativeClient>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl GenerativeClient for RecordingGenerativeClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let result = self.inner.complete(&request).await;
            record_result(&self.recorder, "llm", "complete", &request, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::ports::CompletionResponse;
    use serde_json::json;

    struct CannedClient;

    impl GenerativeClient for CannedClient {
        fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
            Box::pin(async {
                Ok(CompletionResponse {
                    text: r#"{"title":"X","days":[]}"#.into(),
                    prompt_tokens: 5,
                    completion_tokens: 7,
                })
            })
        }
    }

    #[tokio::test]
    async fn records_request_and_response() {
        let path = std::env::temp_dir().join("tripweaver_rec_llm.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "llm")));

        {
            let client = RecordingGenerativeClient::new(Arc::new(CannedClient), Arc::clone(&recorder));
            let request = CompletionRequest {
                model: "gemini-2.5-flash".into(),
                schema: json!({"type": "OBJECT"}),
                instructions: "plan Goa".into(),
            };
            let response = client.complete(&request).await.unwrap();
            assert_eq!(response.completion_tokens, 7);
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        assert_eq!(recorder.len(), 1);
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("plan Goa"));
        assert!(content.contains("complete"));

        let _ = std::fs::remove_file(&path);
    }
}
