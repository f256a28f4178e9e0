//! Weighted substring ranking and autocomplete suggestions.
//!
//! Scoring is intentionally naive: the query is lowercased, trimmed, and split
//! on single spaces; every term contributes a fixed weight per field it appears
//! in as a substring. No stemming, no stop words, no term deduplication.

use crate::model::Post;
use crate::store::PostStore;

/// Per-term weight for a title hit.
pub const TITLE_WEIGHT: u32 = 10;
/// Per-term weight for a hit in the space-joined category list.
pub const CATEGORY_WEIGHT: u32 = 7;
/// Per-term weight for an excerpt hit.
pub const EXCERPT_WEIGHT: u32 = 5;
/// Per-term weight for a content hit.
pub const CONTENT_WEIGHT: u32 = 2;

/// Maximum number of autocomplete suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;
/// Minimum trimmed query length for suggestions.
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// A post paired with its score for one ranking pass.
struct ScoredResult<'a> {
    post: &'a Post,
    score: u32,
}

/// Score a single post against pre-normalized (lowercased) query terms.
///
/// The four field weights are independent and additive: one term matching in
/// every field contributes 24 on its own, and every term in the query can
/// contribute to every field.
fn score_post(post: &Post, terms: &[&str]) -> u32 {
    let title = post.title.to_lowercase();
    let excerpt = post.excerpt.to_lowercase();
    let content = post.content.to_lowercase();
    let categories = post.categories.join(" ").to_lowercase();

    let mut score = 0;
    for term in terms {
        if title.contains(term) {
            score += TITLE_WEIGHT;
        }
        if categories.contains(term) {
            score += CATEGORY_WEIGHT;
        }
        if excerpt.contains(term) {
            score += EXCERPT_WEIGHT;
        }
        if content.contains(term) {
            score += CONTENT_WEIGHT;
        }
    }
    score
}

/// Rank the store's posts against a free-text query.
///
/// Returns the matching posts ordered by descending score; ties keep store
/// order (the sort is stable, and scoring is summation-based so ties are
/// common with short queries). An empty or whitespace-only query returns an
/// empty vec; the caller decides whether that is a user-input error.
pub fn search(store: &PostStore, query: &str) -> Vec<Post> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }
    let terms: Vec<&str> = normalized.split(' ').collect();

    let mut scored: Vec<ScoredResult<'_>> = store
        .posts()
        .iter()
        .map(|post| ScoredResult {
            post,
            score: score_post(post, &terms),
        })
        .filter(|r| r.score > 0)
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(query, results = scored.len(), "ranked posts");
    scored.into_iter().map(|r| r.post.clone()).collect()
}

/// Autocomplete suggestions: post titles and categories containing the query
/// as a case-insensitive substring.
///
/// Titles are scanned in store order, then categories in alphabetical order;
/// duplicates (exact value equality) are kept once, and the list is truncated
/// to [`MAX_SUGGESTIONS`]. Queries shorter than [`MIN_SUGGESTION_CHARS`] after
/// trimming yield nothing.
pub fn suggestions(store: &PostStore, query: &str) -> Vec<String> {
    if query.trim().chars().count() < MIN_SUGGESTION_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut seen = Vec::new();
    for post in store.posts() {
        if post.title.to_lowercase().contains(&needle) && !seen.contains(&post.title) {
            seen.push(post.title.clone());
        }
    }
    for category in store.categories() {
        if category.to_lowercase().contains(&needle) && !seen.contains(&category) {
            seen.push(category);
        }
    }

    seen.truncate(MAX_SUGGESTIONS);
    seen
}
