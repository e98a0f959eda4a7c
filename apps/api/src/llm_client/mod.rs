//! LLM Client — the single point of entry for all Gemini API calls in Aideulim.
//!
//! ARCHITECTURAL RULE: No other module may call the completion service directly.
//! All LLM interactions MUST go through `CompletionService`.
//!
//! No retries and no client-side timeout: one request, one response.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Connection settings for the completion service, handed to the client
/// constructor instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub endpoint: String,
}

/// One prompt sent to the completion service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    /// When set, the service is asked for `application/json` output
    /// conforming to this schema.
    pub response_schema: Option<Value>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// The completion service seam. `GeminiClient` is the production backend;
/// tests substitute their own implementation.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends one request and returns the raw response text.
    async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// Calls `generate` and deserializes the text response as JSON.
pub async fn generate_json<T: DeserializeOwned>(
    service: &dyn CompletionService,
    request: &CompletionRequest,
) -> Result<T, LlmError> {
    let text = service.generate(request).await?;

    // Strip markdown code fences if the model wraps JSON in them
    let text = strip_json_fences(&text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: LlmConfig,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: request.system_instruction.as_deref().map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
            generation_config: request.response_schema.as_ref().map(|schema| {
                GenerationConfig {
                    response_mime_type: "application/json",
                    response_schema: schema,
                }
            }),
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response.text().await?)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, candidate_tokens={}",
                self.config.model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or(LlmError::EmptyContent)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        api_key: Arc<Mutex<Option<String>>>,
    }

    /// Serves a fake `generateContent` endpoint on an ephemeral port.
    async fn spawn_fake_gemini(
        status: axum::http::StatusCode,
        reply: Value,
    ) -> (String, Captured) {
        let captured = Captured::default();
        let app = Router::new()
            .route(
                "/v1beta/models/:model",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            *captured.body.lock().unwrap() = Some(body);
                            *captured.api_key.lock().unwrap() = headers
                                .get("x-goog-api-key")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/v1beta"), captured)
    }

    fn client_for(endpoint: String) -> GeminiClient {
        GeminiClient::new(LlmConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            endpoint,
        })
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let client = client_for("https://example.test/v1beta/".to_string());
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_response_text_concatenates_first_candidate_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "안녕"}, {"text": "하세요"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("안녕하세요"));
    }

    #[test]
    fn test_response_text_none_without_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.text().is_none());
    }

    #[tokio::test]
    async fn test_generate_sends_schema_and_returns_text() {
        let reply = json!({
            "candidates": [{"content": {"parts": [{"text": "{\"ok\": true}"}]}}],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
        });
        let (endpoint, captured) = spawn_fake_gemini(axum::http::StatusCode::OK, reply).await;
        let client = client_for(endpoint);

        let request = CompletionRequest::new("요약해줘")
            .with_response_schema(json!({"type": "OBJECT"}));
        let text = client.generate(&request).await.unwrap();
        assert_eq!(text, "{\"ok\": true}");

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "요약해줘");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(body.get("systemInstruction").is_none());
        assert_eq!(
            captured.api_key.lock().unwrap().as_deref(),
            Some("test-key")
        );
    }

    #[tokio::test]
    async fn test_generate_sends_system_instruction() {
        let reply = json!({"candidates": [{"content": {"parts": [{"text": "draft"}]}}]});
        let (endpoint, captured) = spawn_fake_gemini(axum::http::StatusCode::OK, reply).await;
        let client = client_for(endpoint);

        let request = CompletionRequest::new("prompt").with_system_instruction("be warm");
        assert_eq!(client.generate(&request).await.unwrap(), "draft");

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be warm");
        assert!(body.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn test_generate_maps_error_status_to_api_error() {
        let reply = json!({"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}});
        let (endpoint, _) =
            spawn_fake_gemini(axum::http::StatusCode::BAD_REQUEST, reply).await;
        let client = client_for(endpoint);

        let err = client
            .generate(&CompletionRequest::new("prompt"))
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_is_empty_content() {
        let (endpoint, _) =
            spawn_fake_gemini(axum::http::StatusCode::OK, json!({"candidates": []})).await;
        let client = client_for(endpoint);

        let err = client
            .generate(&CompletionRequest::new("prompt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_generate_non_json_success_body_is_parse_error() {
        let app = Router::new().route(
            "/v1beta/models/:model",
            post(|| async { "<html>upstream proxy page</html>" }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let client = client_for(format!("http://{addr}/v1beta"));

        let err = client
            .generate(&CompletionRequest::new("prompt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_generate_unreachable_endpoint_is_http_error() {
        let client = client_for("http://127.0.0.1:1/v1beta".to_string());
        let err = client
            .generate(&CompletionRequest::new("prompt"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }

    #[tokio::test]
    async fn test_generate_json_parses_fenced_output() {
        let reply = json!({
            "candidates": [{"content": {"parts": [{"text": "```json\n{\"n\": 3}\n```"}]}}]
        });
        let (endpoint, _) = spawn_fake_gemini(axum::http::StatusCode::OK, reply).await;
        let client = client_for(endpoint);

        #[derive(Deserialize)]
        struct N {
            n: u32,
        }
        let parsed: N = generate_json(&client, &CompletionRequest::new("prompt"))
            .await
            .unwrap();
        assert_eq!(parsed.n, 3);
    }
}
