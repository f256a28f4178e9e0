//! HTTP client for a deployed summarize endpoint.

use blogquiz_core::model::Post;
use tracing::instrument;

use crate::error::SummaryError;
use crate::model::MAX_ARTICLES;
use crate::retry::RetryPolicy;
use crate::types::{SummarizeRequest, SummarizeSuccess};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the summarize proxy. Retries transient failures (overload,
/// network) per its [`RetryPolicy`]; terminal errors fail immediately.
pub struct SummaryClient {
    endpoint: String,
    retry: RetryPolicy,
    client: reqwest::Client,
}

impl SummaryClient {
    pub fn new(endpoint: &str) -> Self {
        Self::with_retry(endpoint, RetryPolicy::default())
    }

    pub fn with_retry(endpoint: &str, retry: RetryPolicy) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            endpoint: endpoint.to_string(),
            retry,
            client,
        }
    }

    /// Request a summary for the top search results.
    ///
    /// Only the first five results are sent; the endpoint caps its prompt at
    /// that many articles anyway.
    #[instrument(skip(self, results), fields(results = results.len()))]
    pub async fn generate(
        &self,
        results: &[Post],
        query: &str,
    ) -> Result<SummarizeSuccess, SummaryError> {
        let request = SummarizeRequest {
            results: results.iter().take(MAX_ARTICLES).cloned().collect(),
            query: query.to_string(),
        };

        self.retry
            .run(
                |attempt| {
                    let client = self.client.clone();
                    let endpoint = self.endpoint.clone();
                    let request = request.clone();
                    async move {
                        if attempt > 1 {
                            tracing::info!(attempt, "retrying summary request");
                        }
                        post_once(&client, &endpoint, &request).await
                    }
                },
                SummaryError::is_retryable,
            )
            .await
    }
}

async fn post_once(
    client: &reqwest::Client,
    endpoint: &str,
    request: &SummarizeRequest,
) -> Result<SummarizeSuccess, SummaryError> {
    let response = client.post(endpoint).json(request).send().await.map_err(|e| {
        if e.is_timeout() {
            SummaryError::Timeout(DEFAULT_TIMEOUT_SECS)
        } else {
            SummaryError::NetworkError(e.to_string())
        }
    })?;

    let status = response.status().as_u16();
    match status {
        200..=299 => response
            .json::<SummarizeSuccess>()
            .await
            .map_err(|e| SummaryError::InvalidResponse(e.to_string())),
        503 => Err(SummaryError::Overloaded),
        404 => Err(SummaryError::NotFound),
        500 => {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<crate::types::SummarizeFailure>(&body)
                .map(|f| f.error)
                .unwrap_or(body);
            Err(SummaryError::ServerError(message))
        }
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(SummaryError::ApiError { status, message })
        }
    }
}
