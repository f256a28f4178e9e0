//! Summary-layer error types.

use thiserror::Error;

/// Errors from the summarize endpoint or the upstream model.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The service is temporarily overloaded (HTTP 503). Worth retrying.
    #[error("summary service overloaded, retry later")]
    Overloaded,

    /// A network error occurred. Worth retrying.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The request timed out. Worth retrying.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The summarize endpoint does not exist (HTTP 404). A deployment or
    /// configuration problem, never fixed by retrying.
    #[error("summarize endpoint not found (check the configured URL)")]
    NotFound,

    /// The service failed internally (HTTP 500).
    #[error("summary service error: {0}")]
    ServerError(String),

    /// Any other non-success HTTP status.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response body was not the expected shape.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

impl SummaryError {
    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SummaryError::Overloaded | SummaryError::NetworkError(_) | SummaryError::Timeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(SummaryError::Overloaded.is_retryable());
        assert!(SummaryError::NetworkError("reset".into()).is_retryable());
        assert!(SummaryError::Timeout(10).is_retryable());

        assert!(!SummaryError::NotFound.is_retryable());
        assert!(!SummaryError::ServerError("boom".into()).is_retryable());
        assert!(!SummaryError::ApiError {
            status: 418,
            message: "teapot".into()
        }
        .is_retryable());
    }
}
