//! Error types for gesture catalog construction.

use handsign_core::error::HandSignError;

/// Errors from building a gesture catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate gesture name: {0}")]
    DuplicateName(String),
    #[error("Gesture name must not be empty")]
    EmptyName,
    #[error("Catalog has no gestures")]
    Empty,
}

impl From<CatalogError> for HandSignError {
    fn from(err: CatalogError) -> Self {
        HandSignError::Catalog(err.to_string())
    }
}
