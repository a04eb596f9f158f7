//! [`ArticleApi`] implementation over reqwest.

use async_trait::async_trait;
use tabloid_core::{Article, ArticleDraft, ArticleId};

use crate::{
    ArticleApi, ArticleClient,
    error::ClientError,
    http::{check_response, decode_json},
};

impl ArticleClient {
    fn collection_url(&self) -> String {
        format!("{}/articles", self.base)
    }

    fn item_url(&self, id: ArticleId) -> String {
        format!("{}/articles/{id}", self.base)
    }

    fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/articles/search?keyword={}",
            self.base,
            urlencoding::encode(keyword)
        )
    }

    /// Send a request and reject non-success statuses, logging the outcome.
    async fn execute(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let result = match request.send().await {
            Ok(resp) => check_response(resp).await,
            Err(e) => Err(ClientError::from(e)),
        };
        match &result {
            Ok(resp) => {
                tracing::debug!(operation, status = resp.status().as_u16(), "articles api call");
            }
            Err(e) => {
                tracing::warn!(operation, kind = ?e.kind(), %e, "articles api call failed");
            }
        }
        result
    }
}

#[async_trait]
impl ArticleApi for ArticleClient {
    async fn list_all(&self) -> Result<Vec<Article>, ClientError> {
        let resp = self
            .execute("list", self.http.get(self.collection_url()))
            .await?;
        decode_json(resp).await
    }

    async fn get_by_id(&self, id: ArticleId) -> Result<Article, ClientError> {
        let resp = self.execute("get", self.http.get(self.item_url(id))).await?;
        decode_json(resp).await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Article>, ClientError> {
        let resp = self
            .execute("search", self.http.get(self.search_url(keyword)))
            .await?;
        decode_json(resp).await
    }

    async fn create(&self, draft: &ArticleDraft) -> Result<Article, ClientError> {
        let resp = self
            .execute("create", self.http.post(self.collection_url()).json(draft))
            .await?;
        decode_json(resp).await
    }

    async fn update(&self, id: ArticleId, draft: &ArticleDraft) -> Result<Article, ClientError> {
        let resp = self
            .execute("update", self.http.put(self.item_url(id)).json(draft))
            .await?;
        decode_json(resp).await
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ClientError> {
        self.execute("delete", self.http.delete(self.item_url(id)))
            .await?;
        Ok(())
    }
}
