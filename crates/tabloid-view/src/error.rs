//! View error types.
//!
//! Network failures are not errors at this level: they become the view's
//! error message and leave the article list untouched.

use tabloid_core::{ArticleId, CoreError};
use thiserror::Error;

use crate::state::Operation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// Another operation is still in flight.
    #[error("busy: {running} is still in progress")]
    Busy { running: Operation },

    /// A form action was attempted with no form open.
    #[error("no article form is open")]
    NoForm,

    /// The id does not match any article in the current list.
    #[error("article {0} is not in the current list")]
    UnknownArticle(ArticleId),

    /// The article being edited has no server id.
    #[error(transparent)]
    Core(#[from] CoreError),
}
