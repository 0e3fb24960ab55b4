//! Products domain errors.

use thiserror::Error;

/// Raised when a product status label is not one of the enumerated values.
///
/// This is an input-boundary failure, not a validation violation: it occurs
/// before a structurally valid record exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product status: {0}")]
pub struct ParseProductStatusError(pub String);

/// Failures raised by a products repository.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Failures surfaced by the products service.
///
/// Repository errors pass through unmodified.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] ProductsRepositoryError),
}
