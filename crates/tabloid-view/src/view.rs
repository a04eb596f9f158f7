use tabloid_client::{ArticleApi, ClientError};
use tabloid_core::{Article, ArticleId, RefreshPolicy};

use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::error::ViewError;
use crate::messages::failure_message;
use crate::state::{Activity, ArticleForm, Mutation, Operation};

/// Result of [`ArticleView::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The title was blank; nothing was sent and the form stays open.
    Skipped,
    /// The create or update call succeeded and the form was closed.
    Saved,
    /// The call failed; the form stays open and the error is set.
    Failed,
}

/// Result of [`ArticleView::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

/// List/search/form state for one user session, driving an [`ArticleApi`].
///
/// Every network operation goes through a single-flight guard: starting one
/// while another is in flight returns [`ViewError::Busy`].
#[derive(Debug)]
pub struct ArticleView<A> {
    api: A,
    policy: RefreshPolicy,
    articles: Vec<Article>,
    search_term: String,
    /// Keyword of the last submitted search, if the list is currently filtered.
    last_search: Option<String>,
    activity: Activity,
    form: Option<ArticleForm>,
}

impl<A: ArticleApi> ArticleView<A> {
    #[must_use]
    pub fn new(api: A, policy: RefreshPolicy) -> Self {
        Self {
            api,
            policy,
            articles: Vec::new(),
            search_term: String::new(),
            last_search: None,
            activity: Activity::Pending,
            form: None,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    pub const fn is_loading(&self) -> bool {
        self.activity.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.activity.error()
    }

    pub const fn form(&self) -> Option<&ArticleForm> {
        self.form.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    // ── Loading and search ─────────────────────────────────────────

    /// Fetch the full collection. Used on mount and for explicit refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Busy`] if another operation is in flight.
    pub async fn load_articles(&mut self) -> Result<(), ViewError> {
        self.begin(Operation::List)?;
        self.last_search = None;
        self.fetch_all().await;
        Ok(())
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Run the current search term. A blank term lists everything instead.
    ///
    /// Editing the term with [`Self::set_search_term`] alone changes nothing
    /// until this is called.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Busy`] if another operation is in flight.
    pub async fn submit_search(&mut self) -> Result<(), ViewError> {
        if self.search_term.trim().is_empty() {
            return self.load_articles().await;
        }
        self.begin(Operation::Search)?;
        let keyword = self.search_term.clone();
        self.fetch_search(&keyword).await;
        self.last_search = Some(keyword);
        Ok(())
    }

    /// Set the search term and submit it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Busy`] if another operation is in flight.
    pub async fn search(&mut self, keyword: impl Into<String>) -> Result<(), ViewError> {
        self.set_search_term(keyword);
        self.submit_search().await
    }

    // ── Form ───────────────────────────────────────────────────────

    /// Open an empty form for a new article.
    pub fn open_new(&mut self) {
        self.form = Some(ArticleForm::new_article());
    }

    /// Open the form pre-filled from `article`.
    pub fn open_edit(&mut self, article: &Article) {
        self.form = Some(ArticleForm::edit(article));
    }

    /// Open the form for the listed article with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownArticle`] if no listed article has that id.
    pub fn open_edit_by_id(&mut self, id: ArticleId) -> Result<(), ViewError> {
        let article = self
            .articles
            .iter()
            .find(|a| a.id == Some(id))
            .ok_or(ViewError::UnknownArticle(id))?;
        self.form = Some(ArticleForm::edit(article));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ViewError::NoForm`] if no form is open.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ViewError> {
        self.form.as_mut().ok_or(ViewError::NoForm)?.draft.title = title.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ViewError::NoForm`] if no form is open.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ViewError> {
        self.form.as_mut().ok_or(ViewError::NoForm)?.draft.description = description.into();
        Ok(())
    }

    /// Close the form and discard the draft. No network call.
    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Create or update from the open form, then refresh per policy.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NoForm`] if no form is open,
    /// [`ViewError::Busy`] if another operation is in flight, or
    /// [`ViewError::Core`] if the edited article has no id.
    pub async fn save(&mut self) -> Result<SaveOutcome, ViewError> {
        let form = self.form.as_ref().ok_or(ViewError::NoForm)?;
        if !form.draft.is_savable() {
            tracing::debug!("save skipped: blank title");
            return Ok(SaveOutcome::Skipped);
        }
        let target = form.editing.as_ref().map(Article::require_id).transpose()?;
        let draft = form.draft.clone();

        self.begin(Operation::Save)?;
        let result = match target {
            Some(id) => self.api.update(id, &draft).await.map(Mutation::Updated),
            None => self.api.create(&draft).await.map(Mutation::Created),
        };
        match result {
            Ok(mutation) => {
                self.apply_refresh(mutation).await;
                self.form = None;
                Ok(SaveOutcome::Saved)
            }
            Err(e) => {
                self.fail(Operation::Save, &e);
                Ok(SaveOutcome::Failed)
            }
        }
    }

    // ── Delete ─────────────────────────────────────────────────────

    /// Delete an article after the user confirms.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Busy`] if another operation is in flight.
    pub async fn delete<C>(&mut self, id: ArticleId, confirm: &mut C) -> Result<DeleteOutcome, ViewError>
    where
        C: Confirm + ?Sized,
    {
        self.ensure_idle()?;
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }

        self.begin(Operation::Delete)?;
        match self.api.delete(id).await {
            Ok(()) => {
                self.apply_refresh(Mutation::Deleted(id)).await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                self.fail(Operation::Delete, &e);
                Ok(DeleteOutcome::Failed)
            }
        }
    }

    /// Forget an in-flight operation whose future was dropped before it
    /// finished, so the guard accepts new work again.
    pub fn reset_activity(&mut self) {
        if let Activity::Loading(operation) = self.activity {
            tracing::debug!(%operation, "abandoning in-flight operation");
            self.activity = Activity::Idle;
        }
    }

    // ── Internals ──────────────────────────────────────────────────

    fn ensure_idle(&self) -> Result<(), ViewError> {
        match self.activity {
            Activity::Loading(running) => Err(ViewError::Busy { running }),
            _ => Ok(()),
        }
    }

    fn begin(&mut self, operation: Operation) -> Result<(), ViewError> {
        self.ensure_idle()?;
        tracing::debug!(%operation, "view operation started");
        self.activity = Activity::Loading(operation);
        Ok(())
    }

    fn fail(&mut self, operation: Operation, error: &ClientError) {
        let message = failure_message(operation, error);
        tracing::warn!(%operation, kind = ?error.kind(), %error, "view operation failed");
        self.activity = Activity::Failed(message);
    }

    async fn fetch_all(&mut self) {
        self.activity = Activity::Loading(Operation::List);
        match self.api.list_all().await {
            Ok(articles) => {
                self.articles = articles;
                self.activity = Activity::Idle;
            }
            Err(e) => self.fail(Operation::List, &e),
        }
    }

    async fn fetch_search(&mut self, keyword: &str) {
        self.activity = Activity::Loading(Operation::Search);
        match self.api.search(keyword).await {
            Ok(articles) => {
                self.articles = articles;
                self.activity = Activity::Idle;
            }
            Err(e) => self.fail(Operation::Search, &e),
        }
    }

    async fn apply_refresh(&mut self, mutation: Mutation) {
        match self.policy {
            RefreshPolicy::RefetchAll => self.fetch_all().await,
            RefreshPolicy::ReapplySearch => match self.last_search.clone() {
                Some(keyword) => self.fetch_search(&keyword).await,
                None => self.fetch_all().await,
            },
            RefreshPolicy::PatchInPlace => {
                self.patch(mutation);
                self.activity = Activity::Idle;
            }
        }
    }

    fn patch(&mut self, mutation: Mutation) {
        match mutation {
            // The server lists newest first.
            Mutation::Created(article) => self.articles.insert(0, article),
            Mutation::Updated(article) => {
                match self
                    .articles
                    .iter_mut()
                    .find(|existing| existing.id.is_some() && existing.id == article.id)
                {
                    Some(existing) => *existing = article,
                    None => self.articles.insert(0, article),
                }
            }
            Mutation::Deleted(id) => self.articles.retain(|a| a.id != Some(id)),
        }
    }
}
