//! BookStore trait definition.
//!
//! Abstracts the persistence backend so the operations engine can run against
//! the production `SqliteBookStore` or an in-memory store in tests.

use super::models::BookRecord;
use anyhow::Result;

/// Trait for book storage backends.
pub trait BookStore: Send + Sync {
    /// Look up a book by its store-assigned id.
    fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>>;

    /// Look up a book by its ISBN.
    fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>>;

    /// All books with the given author, in insertion order.
    fn find_by_author(&self, author: &str) -> Result<Vec<BookRecord>>;

    /// All books in the catalog.
    fn find_all(&self) -> Result<Vec<BookRecord>>;

    /// Check whether a book with the given id exists.
    fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Check whether any book owns the given ISBN.
    fn exists_by_isbn(&self, isbn: &str) -> Result<bool>;

    /// Persist a book. Assigns an id when the record carries none, upserts by
    /// id otherwise. Returns the stored record with its id set.
    fn save(&self, book: &BookRecord) -> Result<BookRecord>;

    /// Persist a batch of books in a single transaction.
    fn save_all(&self, books: &[BookRecord]) -> Result<Vec<BookRecord>>;

    /// Remove a book by id. Not exposed through the operations engine; used
    /// by external maintenance paths.
    fn delete_by_id(&self, id: i64) -> Result<()>;
}
