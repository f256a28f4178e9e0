//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use blogquiz_data::wordpress::{DEFAULT_ENDPOINT, DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE};

/// Top-level blogquiz configuration.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure
/// in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct BlogquizConfig {
    /// WordPress posts endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Posts fetched per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Pagination ceiling.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Deployed summarize endpoint, if any. When set, `summarize` calls it
    /// instead of talking to Gemini directly.
    #[serde(default)]
    pub summarize_url: Option<String>,
    /// Gemini API key for local summary generation. Supports `${VAR}`.
    #[serde(default)]
    pub gemini_key: Option<String>,
}

impl std::fmt::Debug for BlogquizConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogquizConfig")
            .field("endpoint", &self.endpoint)
            .field("per_page", &self.per_page)
            .field("max_pages", &self.max_pages)
            .field("summarize_url", &self.summarize_url)
            .field("gemini_key", &self.gemini_key.as_ref().map(|_| "***"))
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

impl Default for BlogquizConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            per_page: default_per_page(),
            max_pages: default_max_pages(),
            summarize_url: None,
            gemini_key: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `blogquiz.toml` in the current directory
/// 2. `~/.config/blogquiz/config.toml`
///
/// Environment variable override: `BLOGQUIZ_GEMINI_KEY`.
pub fn load_config_from(path: Option<&Path>) -> Result<BlogquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("blogquiz.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<BlogquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => BlogquizConfig::default(),
    };

    if let Ok(key) = std::env::var("BLOGQUIZ_GEMINI_KEY") {
        config.gemini_key = Some(key);
    }

    config.endpoint = resolve_env_vars(&config.endpoint);
    config.summarize_url = config.summarize_url.as_deref().map(resolve_env_vars);
    config.gemini_key = config.gemini_key.as_deref().map(resolve_env_vars);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("blogquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BlogquizConfig::default();
        assert!(config.endpoint.contains("umanesimodigitale.info"));
        assert_eq!(config.per_page, 100);
        assert_eq!(config.max_pages, 10);
        assert!(config.gemini_key.is_none());
    }

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_BLOGQUIZ_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_BLOGQUIZ_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_BLOGQUIZ_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_BLOGQUIZ_TEST_VAR");
    }

    #[test]
    fn parse_partial_toml_uses_defaults() {
        let toml_str = r#"
endpoint = "https://example.org/wp-json/wp/v2/posts"
gemini_key = "test-key"
"#;
        let config: BlogquizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint, "https://example.org/wp-json/wp/v2/posts");
        assert_eq!(config.per_page, 100);
        assert_eq!(config.gemini_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn debug_masks_the_key() {
        let config = BlogquizConfig {
            gemini_key: Some("secret".into()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/no/such/blogquiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
