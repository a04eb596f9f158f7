//! # tabloid-client
//!
//! Typed HTTP client for the Tabloid articles API.
//!
//! Each [`ArticleApi`] operation maps to exactly one REST call under the
//! configured base URL:
//!
//! | Operation   | Request                                   |
//! |-------------|-------------------------------------------|
//! | `list_all`  | `GET /articles`                           |
//! | `get_by_id` | `GET /articles/{id}`                      |
//! | `search`    | `GET /articles/search?keyword={keyword}`  |
//! | `create`    | `POST /articles` with `{title, description}` |
//! | `update`    | `PUT /articles/{id}` with `{title, description}` |
//! | `delete`    | `DELETE /articles/{id}`                   |
//!
//! Any non-2xx status or transport failure is an error. Nothing is retried.

mod articles;
mod error;
mod http;

pub use error::{ClientError, ErrorKind};

use async_trait::async_trait;
use std::time::Duration;
use tabloid_core::{Article, ArticleDraft, ArticleId};

// ── Trait ──────────────────────────────────────────────────────────

/// The article operations the view layer depends on.
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// Fetch the full collection.
    async fn list_all(&self) -> Result<Vec<Article>, ClientError>;

    /// Fetch one article.
    async fn get_by_id(&self, id: ArticleId) -> Result<Article, ClientError>;

    /// Fetch the articles the server considers a match for `keyword`.
    async fn search(&self, keyword: &str) -> Result<Vec<Article>, ClientError>;

    /// Create an article; returns the server's representation.
    async fn create(&self, draft: &ArticleDraft) -> Result<Article, ClientError>;

    /// Replace the title and description of an existing article.
    async fn update(&self, id: ArticleId, draft: &ArticleDraft) -> Result<Article, ClientError>;

    /// Remove an article.
    async fn delete(&self, id: ArticleId) -> Result<(), ClientError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// Settings resolved once at startup and handed to [`ArticleClient::new`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientSettings {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("tabloid/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// reqwest-backed [`ArticleApi`] implementation.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http: reqwest::Client,
    base: String,
}

impl ArticleClient {
    /// Build a client for the API rooted at `settings.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the base URL is not an
    /// absolute http(s) URL, or [`ClientError::Transport`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let base = normalize_base_url(&settings.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, base })
    }

    /// The normalized base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
