//! Cross-cutting error types for Tabloid.
//!
//! Transport and configuration errors live in their own crates
//! (`ClientError`, `ConfigError`). Everything converges into `anyhow` in
//! `tabloid-cli`.

use thiserror::Error;

/// Errors that can be raised by any Tabloid crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (empty title and similar).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An article without a server-assigned id was used where one is required.
    #[error("Article has no id; it has not been saved yet")]
    MissingId,
}
