//! blogquiz-data — Loads posts from a WordPress REST endpoint.
//!
//! Fetches pages of posts, normalizes the WordPress wire format into the
//! core's [`Post`](blogquiz_core::model::Post) shape, and falls back to the
//! built-in sample set when the API is unreachable. Load failures never reach
//! the search/quiz core.

pub mod error;
pub mod html;
pub mod wordpress;

pub use error::DataError;
pub use wordpress::{load_or_sample, WordPressClient};
