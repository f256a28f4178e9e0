//! Command implementations.

use blogquiz_core::sample::sample_posts;
use blogquiz_core::store::PostStore;
use blogquiz_data::wordpress::{load_or_sample, WordPressClient};

use crate::config::BlogquizConfig;

pub mod categories;
pub mod quiz;
pub mod search;
pub mod suggest;
pub mod summarize;

/// Build the post store every command works against: the built-in samples
/// with `--sample`, otherwise the WordPress API (which itself falls back to
/// the samples when unreachable).
pub async fn load_store(sample: bool, config: &BlogquizConfig) -> PostStore {
    if sample {
        tracing::debug!("using built-in sample posts");
        return PostStore::from_posts(sample_posts());
    }
    let client = WordPressClient::with_limits(&config.endpoint, config.per_page, config.max_pages);
    load_or_sample(&client).await
}
