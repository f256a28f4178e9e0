//! In-memory post store.
//!
//! An explicitly constructed instance owns every loaded [`Post`] in load order
//! and exposes read-only access to the ranking engine and quiz synthesizer.
//! The progressive loader appends pages as they arrive; posts are never
//! individually mutated or removed within a session.

use std::collections::BTreeSet;

use crate::model::Post;

/// Ordered collection of normalized posts.
#[derive(Debug, Default, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an initial batch of posts.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Append a page of posts, preserving arrival order.
    pub fn append(&mut self, posts: Vec<Post>) {
        self.posts.extend(posts);
    }

    /// All posts in load order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The deduplicated union of every post's categories, alphabetically
    /// sorted. Recomputed on demand.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .posts
            .iter()
            .flat_map(|p| p.categories.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_posts;

    #[test]
    fn categories_are_unique_and_sorted() {
        let store = PostStore::from_posts(sample_posts());
        let categories = store.categories();

        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);

        // Every post category must appear, and nothing else.
        for post in store.posts() {
            for cat in &post.categories {
                assert!(categories.contains(cat), "missing category {cat}");
            }
        }
        let union: usize = store
            .posts()
            .iter()
            .flat_map(|p| &p.categories)
            .collect::<std::collections::HashSet<_>>()
            .len();
        assert_eq!(categories.len(), union);
    }

    #[test]
    fn append_preserves_order() {
        let samples = sample_posts();
        let (first, rest) = samples.split_at(3);
        let mut store = PostStore::from_posts(first.to_vec());
        store.append(rest.to_vec());

        assert_eq!(store.len(), samples.len());
        let ids: Vec<u64> = store.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_store() {
        let store = PostStore::new();
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
    }
}
