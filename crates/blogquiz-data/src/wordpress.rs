//! WordPress REST API client and post normalization.
//!
//! Pages through `GET {endpoint}?per_page=N&page=P&_embed`, converting each
//! page into normalized [`Post`]s. Page 1 must succeed; failures on later
//! pages stop pagination with a warning and keep what was already loaded,
//! matching the progressive-loading behavior of the original site.

use blogquiz_core::model::Post;
use blogquiz_core::sample::sample_posts;
use blogquiz_core::store::PostStore;

use serde::Deserialize;

use crate::error::DataError;
use crate::html::strip_html;

/// The blog this tool was built for; override via config or `--endpoint`.
pub const DEFAULT_ENDPOINT: &str = "https://umanesimodigitale.info/wp-json/wp/v2/posts";
/// WordPress caps `per_page` at 100.
pub const DEFAULT_PER_PAGE: u32 = 100;
/// Pagination ceiling: 10 pages of 100 posts.
pub const DEFAULT_MAX_PAGES: u32 = 10;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/600x400/3498db/ffffff?text=Umanesimo+Digitale";
const DEFAULT_AUTHOR: &str = "Franco Bagaglia";

// --- WordPress wire format -------------------------------------------------

#[derive(Debug, Deserialize)]
struct WpPost {
    id: u64,
    date: String,
    link: String,
    title: WpRendered,
    excerpt: WpRendered,
    content: WpRendered,
    #[serde(rename = "_embedded", default)]
    embedded: Option<WpEmbedded>,
}

#[derive(Debug, Deserialize)]
struct WpRendered {
    rendered: String,
}

#[derive(Debug, Default, Deserialize)]
struct WpEmbedded {
    #[serde(rename = "wp:featuredmedia", default)]
    featured_media: Vec<WpMedia>,
    /// Term groups: index 0 is categories, index 1 tags.
    #[serde(rename = "wp:term", default)]
    terms: Vec<Vec<WpTerm>>,
    #[serde(default)]
    author: Vec<WpAuthor>,
}

#[derive(Debug, Deserialize)]
struct WpMedia {
    #[serde(default)]
    source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WpTerm {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WpAuthor {
    name: String,
}

// --- Normalization ---------------------------------------------------------

/// Reformat a WordPress timestamp (`2025-01-15T09:30:00`, no zone) to the
/// dd/mm/yyyy display form. Unparseable input is passed through unchanged.
fn format_date(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn normalize(wp: WpPost) -> Post {
    let embedded = wp.embedded.unwrap_or_default();

    let image = embedded
        .featured_media
        .first()
        .and_then(|m| m.source_url.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let categories = embedded
        .terms
        .first()
        .map(|group| group.iter().map(|t| t.name.clone()).collect())
        .unwrap_or_default();

    let author = embedded
        .author
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

    Post {
        id: wp.id,
        title: strip_html(&wp.title.rendered),
        excerpt: strip_html(&wp.excerpt.rendered),
        content: strip_html(&wp.content.rendered),
        url: wp.link,
        image,
        date: format_date(&wp.date),
        categories,
        author,
    }
}

// --- Client ----------------------------------------------------------------

/// Paginated WordPress REST client.
pub struct WordPressClient {
    endpoint: String,
    per_page: u32,
    max_pages: u32,
    client: reqwest::Client,
}

impl WordPressClient {
    pub fn new(endpoint: &str) -> Self {
        Self::with_limits(endpoint, DEFAULT_PER_PAGE, DEFAULT_MAX_PAGES)
    }

    pub fn with_limits(endpoint: &str, per_page: u32, max_pages: u32) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            endpoint: endpoint.to_string(),
            per_page,
            max_pages,
            client,
        }
    }

    /// Fetch and normalize one page of posts.
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<Post>, DataError> {
        let url = format!(
            "{}?per_page={}&page={}&_embed",
            self.endpoint, self.per_page, page
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                DataError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                DataError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(DataError::ApiError { status, page });
        }

        let wp_posts: Vec<WpPost> = response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        Ok(wp_posts.into_iter().map(normalize).collect())
    }

    /// Page through the endpoint, appending each page into `store`.
    ///
    /// Page 1 failing is an error. A failure on any later page logs a warning
    /// and stops; whatever was loaded stays usable, and the search engine
    /// tolerates a store that grew between calls.
    pub async fn load_into(&self, store: &mut PostStore) -> Result<usize, DataError> {
        let first = self.fetch_page(1).await?;
        let full_page = first.len() == self.per_page as usize;
        store.append(first);
        tracing::info!(loaded = store.len(), "loaded first page from WordPress");

        if full_page {
            for page in 2..=self.max_pages {
                match self.fetch_page(page).await {
                    Ok(posts) if posts.is_empty() => break,
                    Ok(posts) => {
                        let short = posts.len() < self.per_page as usize;
                        store.append(posts);
                        tracing::debug!(page, total = store.len(), "appended page");
                        if short {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(page, error = %e, "stopping pagination early");
                        break;
                    }
                }
            }
        }

        Ok(store.len())
    }
}

/// Load posts from the API, or fall back to the built-in sample set.
///
/// Never fails: the search/quiz core is agnostic to where posts came from.
pub async fn load_or_sample(client: &WordPressClient) -> PostStore {
    let mut store = PostStore::new();
    match client.load_into(&mut store).await {
        Ok(count) => {
            tracing::info!(count, "posts loaded from WordPress");
            store
        }
        Err(e) => {
            tracing::warn!(error = %e, "WordPress API unavailable, using sample posts");
            PostStore::from_posts(sample_posts())
        }
    }
}
