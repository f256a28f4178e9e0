//! The summarize endpoint handler.
//!
//! Framework-agnostic: takes an HTTP method and a raw body, returns a status
//! code and a JSON body, so it can sit behind any server front-end (or be
//! driven directly in tests). Response shapes are the contract in
//! [`types`](crate::types).

use std::time::Instant;

use blogquiz_core::model::Post;
use serde::Serialize;

use crate::error::SummaryError;
use crate::model::{build_prompt, SummaryModel, MAX_ARTICLES};
use crate::types::{SummarizeFailure, SummarizeSuccess, SummaryMetadata};

/// Status code plus serialized JSON body.
#[derive(Debug)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: String,
}

/// Validates summarize requests and forwards them to the upstream model.
pub struct SummarizeProxy {
    model: Option<Box<dyn SummaryModel>>,
}

impl SummarizeProxy {
    pub fn new(model: Box<dyn SummaryModel>) -> Self {
        Self { model: Some(model) }
    }

    /// A proxy with no upstream configured. Every POST fails with 500, the
    /// same way the deployed function behaves without its API key.
    pub fn unconfigured() -> Self {
        Self { model: None }
    }

    pub async fn handle(&self, method: &str, body: &str) -> ProxyResponse {
        // CORS preflight.
        if method.eq_ignore_ascii_case("OPTIONS") {
            return ProxyResponse {
                status: 200,
                body: String::new(),
            };
        }

        if !method.eq_ignore_ascii_case("POST") {
            return failure(405, SummarizeFailure::new("Method Not Allowed. Use POST."));
        }

        let (results, query) = match parse_request(body) {
            Ok(parsed) => parsed,
            Err(message) => return failure(400, SummarizeFailure::new(message)),
        };

        let Some(model) = &self.model else {
            tracing::error!("summarize called with no upstream model configured");
            return failure(
                500,
                SummarizeFailure::new(
                    "API key not configured. Please set BLOGQUIZ_GEMINI_KEY environment variable.",
                ),
            );
        };

        let articles: Vec<Post> = results.into_iter().take(MAX_ARTICLES).collect();
        let prompt = build_prompt(&articles, &query);
        tracing::info!(query = %query, articles = articles.len(), "generating summary");

        let start = Instant::now();
        match model.summarize(&prompt).await {
            Ok(summary) => {
                let generation_time_ms = start.elapsed().as_millis() as u64;
                tracing::info!(generation_time_ms, chars = summary.len(), "summary generated");
                success(SummarizeSuccess {
                    success: true,
                    summary,
                    metadata: SummaryMetadata {
                        articles_analyzed: articles.len(),
                        query,
                        generation_time_ms,
                        timestamp: chrono::Utc::now().to_rfc3339(),
                    },
                })
            }
            Err(SummaryError::Overloaded) => failure(
                503,
                SummarizeFailure::with_type(SummaryError::Overloaded.to_string(), "Overloaded"),
            ),
            Err(e) => {
                tracing::error!(error = %e, "upstream summary generation failed");
                failure(500, SummarizeFailure::with_type(e.to_string(), "UpstreamError"))
            }
        }
    }
}

/// Validate the request body; both checks mirror the deployed contract.
fn parse_request(body: &str) -> Result<(Vec<Post>, String), &'static str> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| "Invalid or empty results array")?;

    let results = value
        .get("results")
        .and_then(|r| r.as_array())
        .filter(|r| !r.is_empty())
        .ok_or("Invalid or empty results array")?;
    let results: Vec<Post> = serde_json::from_value(serde_json::Value::Array(results.clone()))
        .map_err(|_| "Invalid or empty results array")?;

    let query = value
        .get("query")
        .and_then(|q| q.as_str())
        .filter(|q| !q.is_empty())
        .ok_or("Invalid or missing query")?;

    Ok((results, query.to_string()))
}

fn failure(status: u16, body: SummarizeFailure) -> ProxyResponse {
    ProxyResponse {
        status,
        body: json_body(&body),
    }
}

fn success(body: SummarizeSuccess) -> ProxyResponse {
    ProxyResponse {
        status: 200,
        body: json_body(&body),
    }
}

fn json_body<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to serialize response body");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockModel;
    use blogquiz_core::sample::sample_posts;

    fn request_body(posts: &[Post], query: &str) -> String {
        serde_json::to_string(&serde_json::json!({ "results": posts, "query": query })).unwrap()
    }

    #[tokio::test]
    async fn options_preflight_is_empty_200() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::with_summary("x")));
        let response = proxy.handle("OPTIONS", "").await;
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn non_post_is_405() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::with_summary("x")));
        let response = proxy.handle("GET", "").await;
        assert_eq!(response.status, 405);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Method Not Allowed. Use POST.");
    }

    #[tokio::test]
    async fn empty_results_are_rejected() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::with_summary("x")));

        for body in [
            "not json",
            r#"{"query": "etica"}"#,
            r#"{"results": [], "query": "etica"}"#,
        ] {
            let response = proxy.handle("POST", body).await;
            assert_eq!(response.status, 400, "body: {body}");
        }
    }

    #[tokio::test]
    async fn missing_query_is_rejected() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::with_summary("x")));
        let posts = sample_posts();

        let no_query = serde_json::to_string(&serde_json::json!({ "results": posts })).unwrap();
        let response = proxy.handle("POST", &no_query).await;
        assert_eq!(response.status, 400);

        let response = proxy.handle("POST", &request_body(&posts, "")).await;
        assert_eq!(response.status, 400);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Invalid or missing query");
    }

    #[tokio::test]
    async fn unconfigured_model_is_500() {
        let proxy = SummarizeProxy::unconfigured();
        let response = proxy
            .handle("POST", &request_body(&sample_posts(), "etica"))
            .await;

        assert_eq!(response.status, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("API key not configured"));
    }

    #[tokio::test]
    async fn overloaded_upstream_is_503() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::overloaded()));
        let response = proxy
            .handle("POST", &request_body(&sample_posts(), "etica"))
            .await;

        assert_eq!(response.status, 503);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["type"], "Overloaded");
    }

    #[tokio::test]
    async fn failing_upstream_is_500() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::failing()));
        let response = proxy
            .handle("POST", &request_body(&sample_posts(), "etica"))
            .await;

        assert_eq!(response.status, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["type"], "UpstreamError");
    }

    #[tokio::test]
    async fn success_carries_summary_and_metadata() {
        let proxy = SummarizeProxy::new(Box::new(MockModel::with_summary("<h3>Sintesi</h3>")));
        let response = proxy
            .handle("POST", &request_body(&sample_posts()[..3], "etica"))
            .await;

        assert_eq!(response.status, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["summary"], "<h3>Sintesi</h3>");
        assert_eq!(body["metadata"]["articlesAnalyzed"], 3);
        assert_eq!(body["metadata"]["query"], "etica");
        assert!(body["metadata"]["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn prompt_is_capped_at_five_articles() {
        // Shared handle so the prompt is still inspectable after the proxy
        // takes ownership of its model.
        let model = std::sync::Arc::new(MockModel::with_summary("ok"));
        let proxy = SummarizeProxy::new(Box::new(SharedModel(model.clone())));

        let posts = sample_posts();
        let response = proxy.handle("POST", &request_body(&posts, "etica")).await;
        assert_eq!(response.status, 200);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["metadata"]["articlesAnalyzed"], 5);

        let prompt = model.last_prompt().unwrap();
        assert!(prompt.contains("=== ARTICOLO 5 ==="));
        assert!(!prompt.contains("=== ARTICOLO 6 ==="));
    }

    struct SharedModel(std::sync::Arc<MockModel>);

    #[async_trait::async_trait]
    impl SummaryModel for SharedModel {
        fn name(&self) -> &str {
            self.0.name()
        }

        async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
            self.0.summarize(prompt).await
        }
    }
}
