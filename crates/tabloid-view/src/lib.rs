//! # tabloid-view
//!
//! Article list/search/form state machine for Tabloid front ends.
//!
//! [`ArticleView`] owns the session's UI state and drives an
//! [`tabloid_client::ArticleApi`]:
//! - the current article list and search term
//! - an [`Activity`] (`Pending`, `Loading`, `Idle`, `Failed`) in place of
//!   separate loading and error flags
//! - an optional add/edit [`ArticleForm`]
//!
//! After every successful create, update or delete the list is brought back
//! in sync according to the configured [`tabloid_core::RefreshPolicy`].
//! [`render::Screen`] turns the state into text.

pub mod confirm;
mod error;
pub mod messages;
pub mod render;
mod state;
mod view;

pub use confirm::{Confirm, DELETE_PROMPT};
pub use error::ViewError;
pub use state::{Activity, ArticleForm, Operation};
pub use view::{ArticleView, DeleteOutcome, SaveOutcome};
