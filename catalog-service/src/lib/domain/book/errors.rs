use thiserror::Error;

use crate::domain::fields::FieldError;

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] FieldError),

    #[error("Invalid page count: {0}")]
    InvalidPageCount(i32),

    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Seller not found: {0}")]
    SellerNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
