//! Catalog operations over a [`MenuDocument`](crate::models::MenuDocument).
//!
//! Both catalogs are free functions that mutate a document handed to them;
//! they never touch storage. The caller (the HTTP layer) loads a document
//! from the [`MenuStore`](crate::store::MenuStore), applies one operation
//! and saves the result back.

pub mod dishes;
pub mod sides;

use thiserror::Error;

/// Errors surfaced by catalog operations.
///
/// Messages are user-facing and French, matching the API responses the
/// admin UI expects. `Validation` maps to HTTP 400, `NotFound` to 404.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
}

impl CatalogError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        CatalogError::NotFound(message.into())
    }
}
