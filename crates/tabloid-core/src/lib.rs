//! # tabloid-core
//!
//! Core types and error types for Tabloid.
//!
//! This crate provides the foundational types shared across all Tabloid crates:
//! - The [`Article`] entity as the articles API serializes it
//! - The [`ArticleDraft`] body sent on create and update
//! - Display helpers for server-owned timestamps
//! - The refresh policy applied after mutations
//! - Cross-cutting error types

pub mod article;
pub mod display;
pub mod enums;
pub mod errors;

pub use article::{Article, ArticleDraft, ArticleId};
pub use enums::RefreshPolicy;
pub use errors::CoreError;
