//! The normalized blog post record.
//!
//! Posts arrive either from the WordPress REST API (normalized by
//! `blogquiz-data`) or from the built-in sample set, and are immutable once
//! loaded. The ranking engine and the quiz synthesizer only ever read them.

use serde::{Deserialize, Serialize};

/// A single blog article in the core's internal shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique, stable identifier (the WordPress post id).
    pub id: u64,
    /// Plain-text title, HTML already stripped.
    pub title: String,
    /// Plain-text excerpt.
    pub excerpt: String,
    /// Plain-text body.
    pub content: String,
    /// Canonical URL of the article.
    pub url: String,
    /// Featured image URL (placeholder when the post has none).
    pub image: String,
    /// Display-formatted publication date. Not sortable.
    pub date: String,
    /// Category names in the order WordPress reports them. A category may
    /// repeat across posts but not within one post.
    pub categories: Vec<String>,
    /// Author display name.
    pub author: String,
}
