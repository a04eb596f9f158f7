use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Server-assigned article identifier.
pub type ArticleId = i64;

/// An article as returned by the articles API.
///
/// `id`, `created_at` and `updated_at` are owned by the server. They are kept
/// exactly as received (timestamps stay raw strings) and are never filled in
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Article {
    /// Return the server id, or [`CoreError::MissingId`] for unsaved articles.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingId`] if the server never assigned an id.
    pub fn require_id(&self) -> Result<ArticleId, CoreError> {
        self.id.ok_or(CoreError::MissingId)
    }

    /// The editable subset of this article.
    #[must_use]
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// The user-editable fields of an article; the body of create and update calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
}

impl ArticleDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Whether the draft may be saved. A title that is empty or only
    /// whitespace blocks saving.
    #[must_use]
    pub fn is_savable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Check the draft before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_savable() {
            Ok(())
        } else {
            Err(CoreError::Validation("title must not be empty".to_string()))
        }
    }
}
