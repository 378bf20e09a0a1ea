//! Live adapter for the `GenerativeClient` port using the Gemini
//! `generateContent` API with structured (JSON schema) output.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::ports::llm::{CompletionFuture, CompletionRequest, CompletionResponse, GenerativeClient};
use crate::ports::PortError;

/// Default API root for Gemini.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Live generative client that calls the Gemini API.
///
/// No timeout is configured: a hung call keeps the invocation waiting.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Creates a client for the given endpoint and API key.
    ///
    /// A missing key is reported when `complete` is called, so history-only
    /// commands work without one.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self { client: Client::new(), endpoint: endpoint.into(), api_key }
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.endpoint.trim_end_matches('/'))
    }
}

/// Request body sent to `generateContent`.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a serde_json::Value,
}

/// Top-level response from `generateContent`.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}

/// Error body returned by the Gemini API.
#[derive(Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GenerativeClient for GeminiClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let api_key = self
                .api_key
                .as_deref()
                .ok_or_else(|| PortError::from("GEMINI_API_KEY environment variable not set"))?;

            let body = GenerateRequest {
                contents: vec![Content {
                    role: "user",
                    parts: vec![Part { text: &request.instructions }],
                }],
                generation_config: GenerationConfig {
                    response_mime_type: "application/json",
                    response_schema: &request.schema,
                },
            };

            let response = self
                .client
                .post(self.url(&request.model))
                .header("x-goog-api-key", api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> PortError { format!("Gemini API request failed: {e}").into() })?;

            let status = response.status();
            let response_text = response.text().await.map_err(|e| -> PortError {
                format!("Failed to read Gemini API response: {e}").into()
            })?;

            if !status.is_success() {
                return Err(describe_error(status, &response_text).into());
            }

            parse_response(&response_text)
        })
    }
}

/// Builds the error message for a non-success status.
fn describe_error(status: StatusCode, body: &str) -> String {
    let msg = serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    if status == StatusCode::SERVICE_UNAVAILABLE || status == StatusCode::TOO_MANY_REQUESTS {
        format!("model unavailable or overloaded ({}): {msg}", status.as_u16())
    } else {
        format!("Gemini API error ({}): {msg}", status.as_u16())
    }
}

/// Extracts the generated text from a successful response body.
fn parse_response(body: &str) -> Result<CompletionResponse, PortError> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| -> PortError { format!("Failed to parse Gemini API response: {e}").into() })?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err("Gemini API returned an empty payload".into());
    }

    let (prompt_tokens, completion_tokens) =
        parsed.usage.map_or((0, 0), |u| (u.prompt_token_count, u.candidates_token_count));

    Ok(CompletionResponse { text, prompt_tokens, completion_tokens })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_candidate_parts() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"title\":" }, { "text": "\"X\",\"days\":[]}" }] }
            }],
            "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 30 }
        })
        .to_string();

        let response = parse_response(&body).unwrap();
        assert_eq!(response.text, r#"{"title":"X","days":[]}"#);
        assert_eq!(response.prompt_tokens, 120);
        assert_eq!(response.completion_tokens, 30);
    }

    #[test]
    fn empty_payload_is_an_error() {
        let body = json!({ "candidates": [] }).to_string();
        let err = parse_response(&body).unwrap_err();
        assert!(err.to_string().contains("empty payload"));

        let blank = json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] });
        assert!(parse_response(&blank.to_string()).is_err());
    }

    #[test]
    fn overloaded_status_is_reported_as_unavailable() {
        let body = json!({ "error": { "code": 503, "message": "The model is overloaded." } });
        let msg = describe_error(StatusCode::SERVICE_UNAVAILABLE, &body.to_string());
        assert!(msg.contains("model unavailable or overloaded (503)"));
        assert!(msg.contains("The model is overloaded."));
    }

    #[test]
    fn non_json_error_body_is_kept_verbatim() {
        let msg = describe_error(StatusCode::BAD_REQUEST, "bad things");
        assert_eq!(msg, "Gemini API error (400): bad things");
    }

    #[test]
    fn url_includes_model() {
        let client = GeminiClient::new("https://example.test/v1beta/", None);
        assert_eq!(
            client.url("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiClient::new("http://127.0.0.1:9", None);
        let request = CompletionRequest {
            model: "gemini-2.5-flash".into(),
            schema: json!({}),
            instructions: "plan".into(),
        };
        let err = client.complete(&request).await.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
