//! UI state pieces owned by [`crate::ArticleView`].

use std::fmt;

use tabloid_core::{Article, ArticleDraft, ArticleId};

/// A network-backed view operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Search,
    Save,
    Delete,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Search => "search",
            Self::Save => "save",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the view is doing right now.
///
/// ```text
/// Pending ──► Loading(op) ──► Idle
///                 ▲      └──► Failed(message)
///                 └─────────── (next operation)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Activity {
    /// Nothing has been fetched yet. Rendered like `Loading`.
    #[default]
    Pending,
    Loading(Operation),
    Idle,
    /// The last operation failed; the message stays until the next one starts.
    Failed(String),
}

impl Activity {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Pending | Self::Loading(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// An open add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleForm {
    pub draft: ArticleDraft,
    /// The article being edited; `None` when adding.
    pub editing: Option<Article>,
}

impl ArticleForm {
    #[must_use]
    pub fn new_article() -> Self {
        Self::default()
    }

    /// Pre-populate from an existing article. Only title and description are
    /// copied into the draft.
    #[must_use]
    pub fn edit(article: &Article) -> Self {
        Self {
            draft: article.to_draft(),
            editing: Some(article.clone()),
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn target_id(&self) -> Option<ArticleId> {
        self.editing.as_ref().and_then(|a| a.id)
    }
}

/// The server result of a successful mutation, used by the refresh policy.
#[derive(Debug, Clone)]
pub(crate) enum Mutation {
    Created(Article),
    Updated(Article),
    Deleted(ArticleId),
}
