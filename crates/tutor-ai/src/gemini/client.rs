//! Gemini API client struct, request building, and response parsing.

use std::sync::Arc;

use tracing::debug;

use crate::{AiError, Reply, Role, TokenUsage, Turn};

use super::config::GeminiConfig;

/// Gemini API client. Cheap to clone; chats opened from it share the
/// underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    pub(crate) config: Arc<GeminiConfig>,
    pub(crate) http: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// No overall request timeout is set; callers needing bounded
    /// latency wrap calls in their own deadline.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| AiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for a full conversation.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        let contents: Vec<_> = turns
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Extract the reply text and usage from a `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Reply, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::Parse("empty candidates".to_string()))?;

        let texts: Vec<&str> = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if texts.is_empty() {
            let reason = first["finishReason"].as_str().unwrap_or("unknown");
            return Err(AiError::Parse(format!(
                "candidate has no text (finish reason: {reason})"
            )));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(Reply {
            text: texts.concat(),
            usage,
        })
    }

    /// POST a conversation to `generateContent` and parse the reply.
    pub(crate) async fn generate(&self, turns: &[Turn]) -> Result<Reply, AiError> {
        let body = self.build_request_body(turns);

        debug!(model = %self.config.model, turns = turns.len(), "Gemini API request");

        let response = self
            .http
            .post(self.api_url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
