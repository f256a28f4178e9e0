//! Wire contract for the summarize endpoint.
//!
//! Both the [`client`](crate::client) and the [`proxy`](crate::proxy) speak
//! this format, so the field names (camelCase in the metadata block) are part
//! of the deployed API and must not drift.

use blogquiz_core::model::Post;
use serde::{Deserialize, Serialize};

/// `POST /summarize` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub results: Vec<Post>,
    pub query: String,
}

/// Successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeSuccess {
    pub success: bool,
    pub summary: String,
    pub metadata: SummaryMetadata,
}

/// Generation metadata attached to every successful summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    pub articles_analyzed: usize,
    pub query: String,
    pub generation_time_ms: u64,
    /// ISO-8601 generation time.
    pub timestamp: String,
}

/// Error response body. `type` and `details` are optional and omitted when
/// absent rather than serialized as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeFailure {
    pub success: bool,
    pub error: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SummarizeFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_type: None,
            details: None,
        }
    }

    pub fn with_type(error: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_type: Some(error_type.into()),
            details: None,
        }
    }
}
