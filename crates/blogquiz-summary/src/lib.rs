//! blogquiz-summary — AI summary generation for search results.
//!
//! Three pieces, mirroring how the feature is deployed: the wire contract
//! shared by client and proxy ([`types`]), the client the CLI uses to talk to
//! a summarize endpoint with bounded retries ([`client`], [`retry`]), and the
//! proxy handler itself ([`proxy`]) which validates requests and forwards to
//! an upstream model behind the [`SummaryModel`](model::SummaryModel) trait.

pub mod client;
pub mod error;
pub mod gemini;
pub mod mock;
pub mod model;
pub mod proxy;
pub mod retry;
pub mod types;

pub use client::SummaryClient;
pub use error::SummaryError;
pub use gemini::GeminiModel;
pub use mock::MockModel;
pub use model::SummaryModel;
pub use proxy::{ProxyResponse, SummarizeProxy};
pub use retry::RetryPolicy;
