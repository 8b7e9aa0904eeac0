use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemNameError {
    #[error("Item name cannot be empty")]
    Empty,

    #[error("Item name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be a finite, non-negative number, got {0}")]
    Invalid(f64),
}

/// Top-level error for item operations
#[derive(Debug, Clone, Error)]
pub enum ItemError {
    #[error("Invalid item name: {0}")]
    InvalidName(#[from] ItemNameError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
