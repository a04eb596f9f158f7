//! In-memory articles API that records every call.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use tabloid_client::{ArticleApi, ClientError};
use tabloid_core::{Article, ArticleDraft, ArticleId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(ArticleId),
    Search(String),
    Create(ArticleDraft),
    Update(ArticleId, ArticleDraft),
    Delete(ArticleId),
}

#[derive(Default)]
struct Inner {
    articles: Vec<Article>,
    next_id: ArticleId,
    calls: Vec<Call>,
    failing: Vec<&'static str>,
}

/// Behaves like the reference server: newest first, search matches title or
/// description case-insensitively.
#[derive(Default)]
pub struct FakeApi {
    inner: Mutex<Inner>,
}

pub fn article(id: ArticleId, title: &str, description: &str) -> Article {
    Article {
        id: Some(id),
        title: title.to_string(),
        description: description.to_string(),
        created_at: Some(format!("2024-01-{:02}T10:00:00", id.clamp(1, 28))),
        updated_at: Some(format!("2024-02-{:02}T10:00:00", id.clamp(1, 28))),
    }
}

impl FakeApi {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next_id = articles.iter().filter_map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                articles,
                next_id,
                ..Inner::default()
            }),
        }
    }

    /// Make every call to `operation` ("list", "get", "search", "create",
    /// "update", "delete") answer 500.
    pub fn fail(&self, operation: &'static str) {
        self.inner.lock().unwrap().failing.push(operation);
    }

    pub fn recover(&self) {
        self.inner.lock().unwrap().failing.clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.failing.contains(&operation) {
            return Err(ClientError::ServerRejected {
                status: 500,
                body: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn stamp(inner: &Inner) -> String {
        format!("2024-03-01T00:00:{:02}", inner.calls.len() % 60)
    }
}

#[async_trait]
impl ArticleApi for FakeApi {
    async fn list_all(&self) -> Result<Vec<Article>, ClientError> {
        self.record("list", Call::List)?;
        Ok(self.inner.lock().unwrap().articles.clone())
    }

    async fn get_by_id(&self, id: ArticleId) -> Result<Article, ClientError> {
        self.record("get", Call::Get(id))?;
        self.inner
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| a.id == Some(id))
            .cloned()
            .ok_or(ClientError::ClientRejected {
                status: 404,
                body: String::new(),
            })
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Article>, ClientError> {
        self.record("search", Call::Search(keyword.to_string()))?;
        let needle = keyword.to_lowercase();
        Ok(self
            .inner
            .lock()
            .unwrap()
            .articles
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &ArticleDraft) -> Result<Article, ClientError> {
        self.record("create", Call::Create(draft.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        let stamp = Self::stamp(&inner);
        let article = Article {
            id: Some(inner.next_id),
            title: draft.title.clone(),
            description: draft.description.clone(),
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
        };
        inner.next_id += 1;
        inner.articles.insert(0, article.clone());
        Ok(article)
    }

    async fn update(&self, id: ArticleId, draft: &ArticleDraft) -> Result<Article, ClientError> {
        self.record("update", Call::Update(id, draft.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        let stamp = Self::stamp(&inner);
        let existing = inner
            .articles
            .iter_mut()
            .find(|a| a.id == Some(id))
            .ok_or(ClientError::ServerRejected {
                status: 500,
                body: format!("Article not found with id: {id}"),
            })?;
        existing.title = draft.title.clone();
        existing.description = draft.description.clone();
        existing.updated_at = Some(stamp);
        Ok(existing.clone())
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ClientError> {
        self.record("delete", Call::Delete(id))?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.articles.len();
        inner.articles.retain(|a| a.id != Some(id));
        if inner.articles.len() == before {
            return Err(ClientError::ServerRejected {
                status: 500,
                body: format!("Article not found with id: {id}"),
            });
        }
        Ok(())
    }
}
