//! Google Gemini upstream via the REST v1 API.
//!
//! Calls `generateContent` directly rather than going through an SDK, since
//! the v1 endpoint is the one that exposes `gemini-1.5-flash`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::SummaryError;
use crate::model::SummaryModel;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL_ID: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gemini-backed summary model.
pub struct GeminiModel {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiModel {
    pub fn new(api_key: &str, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[async_trait]
impl SummaryModel for GeminiModel {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        let url = format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.base_url, MODEL_ID, self.api_key
        );

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_p: 0.95,
                top_k: 40,
                max_output_tokens: 2048,
            },
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                SummaryError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                SummaryError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status == 503 || status == 429 {
            return Err(SummaryError::Overloaded);
        }
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(SummaryError::ApiError { status, message });
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::InvalidResponse(e.to_string()))?;

        api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| SummaryError::InvalidResponse("no candidates returned".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn extracts_summary_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/v1/models/{MODEL_ID}:generateContent")))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [
                    { "content": { "parts": [ { "text": "<h3>Sintesi</h3>" } ] } }
                ]
            })))
            .mount(&server)
            .await;

        let model = GeminiModel::new("test-key", Some(server.uri()));
        let summary = model.summarize("riassumi").await.unwrap();
        assert_eq!(summary, "<h3>Sintesi</h3>");
    }

    #[tokio::test]
    async fn overload_maps_to_retryable_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let model = GeminiModel::new("key", Some(server.uri()));
        let err = model.summarize("riassumi").await.unwrap_err();
        assert!(matches!(err, SummaryError::Overloaded));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn empty_candidates_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let model = GeminiModel::new("key", Some(server.uri()));
        let err = model.summarize("riassumi").await.unwrap_err();
        assert!(matches!(err, SummaryError::InvalidResponse(_)));
    }
}
