//! Entity-level error type.
//!
//! Higher crates wrap `CoreError` in their own enums via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("airplane {airplane} is full ({maxbox} boxes)")]
    CapacityExceeded { airplane: String, maxbox: usize },
}

/// Shorthand result type for entity operations.
pub type CoreResult<T> = Result<T, CoreError>;
