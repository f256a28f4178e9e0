//! Data-loading error types.

use thiserror::Error;

/// Errors that can occur while loading posts from the WordPress API.
#[derive(Debug, Error)]
pub enum DataError {
    /// The API returned a non-success HTTP status.
    #[error("API error (HTTP {status}) for page {page}")]
    ApiError { status: u16, page: u32 },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    ParseError(String),
}
