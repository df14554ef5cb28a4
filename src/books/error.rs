//! Failure taxonomy for book operations.

use thiserror::Error;

/// Outcome classification for every engine operation. Business failures are
/// plain values; store-level failures stay opaque and separate so callers can
/// map them to a 5xx instead of a client error.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("ISBN is missing or is not a 10 or 13 digit number")]
    InvalidIsbn,

    #[error("ISBN {isbn} is already used by another book")]
    DuplicateIsbn { isbn: String },

    #[error("at least two books in the batch share the same ISBN")]
    DuplicateIsbnInBatch,

    #[error("book at index {index} was rejected: {source}")]
    BatchEntry {
        index: usize,
        source: Box<BookError>,
    },

    #[error("book id is required")]
    MissingIdentifier,

    #[error("no matching book found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
