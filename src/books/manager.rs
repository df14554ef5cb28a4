//! Book operations engine.
//!
//! Orchestrates ISBN validation, uniqueness checks against the store, batch
//! admission and partial-update merging. The manager is stateless; all
//! durable state lives in the injected [`BookStore`].

use super::error::BookError;
use crate::book_store::{BookRecord, BookStore};
use crate::isbn;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Reference to a newly created book, with its canonical resource path.
#[derive(Clone, Debug, Serialize)]
pub struct BookLocation {
    pub id: i64,
    pub path: String,
}

pub struct BookManager {
    store: Arc<dyn BookStore>,
}

impl BookManager {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Admit a single book into the catalog.
    ///
    /// Exactly one store write on success, zero writes on any failure path.
    pub fn create_book(&self, book: BookRecord) -> Result<BookLocation, BookError> {
        self.check_admissible(&book)?;
        let saved = self.store.save(&book)?;
        let id = saved
            .id
            .ok_or_else(|| anyhow::anyhow!("store did not assign an id on save"))?;
        debug!("Created book {} with ISBN {:?}", id, saved.isbn);
        Ok(BookLocation {
            id,
            path: format!("/v1/books/{}", id),
        })
    }

    /// Admit a batch of books, all-or-nothing.
    ///
    /// Every record is validated before any write; the first inadmissible
    /// record aborts the whole batch, annotated with its zero-based index.
    /// Existence checks run against the pre-batch store state only.
    pub fn create_books(&self, books: Vec<BookRecord>) -> Result<usize, BookError> {
        let distinct_isbns: HashSet<Option<&str>> =
            books.iter().map(|b| b.isbn.as_deref()).collect();
        if distinct_isbns.len() < books.len() {
            return Err(BookError::DuplicateIsbnInBatch);
        }

        for (index, book) in books.iter().enumerate() {
            match self.check_admissible(book) {
                Ok(()) => {}
                Err(err @ BookError::Store(_)) => return Err(err),
                Err(source) => {
                    return Err(BookError::BatchEntry {
                        index,
                        source: Box::new(source),
                    })
                }
            }
        }

        let saved = self.store.save_all(&books)?;
        debug!("Created batch of {} books", saved.len());
        Ok(saved.len())
    }

    pub fn get_by_id(&self, id: i64) -> Result<BookRecord, BookError> {
        self.store.find_by_id(id)?.ok_or(BookError::NotFound)
    }

    pub fn get_by_isbn(&self, isbn: &str) -> Result<BookRecord, BookError> {
        self.store.find_by_isbn(isbn)?.ok_or(BookError::NotFound)
    }

    /// All books by the given author; an empty result set is `NotFound`.
    pub fn get_by_author(&self, author: &str) -> Result<Vec<BookRecord>, BookError> {
        let books = self.store.find_by_author(author)?;
        if books.is_empty() {
            return Err(BookError::NotFound);
        }
        Ok(books)
    }

    pub fn get_all(&self) -> Result<Vec<BookRecord>, BookError> {
        Ok(self.store.find_all()?)
    }

    /// Merge `patch` into the book that owns `isbn`.
    ///
    /// The key must be a syntactically valid ISBN; the stored record's own
    /// unchanged ISBN is exempt from uniqueness re-checks.
    pub fn update_by_isbn(&self, patch: BookRecord, isbn: &str) -> Result<(), BookError> {
        if !isbn::is_valid(isbn) {
            return Err(BookError::InvalidIsbn);
        }
        let existing = self.store.find_by_isbn(isbn)?.ok_or(BookError::NotFound)?;
        self.apply_update(existing, &patch)
    }

    /// Merge `patch` into the book with the given id.
    pub fn update_by_id(&self, patch: BookRecord, id: Option<i64>) -> Result<(), BookError> {
        let id = id.ok_or(BookError::MissingIdentifier)?;
        let existing = self.store.find_by_id(id)?.ok_or(BookError::NotFound)?;
        self.apply_update(existing, &patch)
    }

    fn apply_update(&self, existing: BookRecord, patch: &BookRecord) -> Result<(), BookError> {
        let merged = merge_patch(existing, patch);
        self.store.save(&merged)?;
        debug!("Updated book {:?}", merged.id);
        Ok(())
    }

    /// The single-record admission rules shared by create and batch create:
    /// a present, syntactically valid ISBN not already owned by a stored book.
    fn check_admissible(&self, book: &BookRecord) -> Result<(), BookError> {
        let isbn = match book.isbn.as_deref() {
            Some(isbn) if isbn::is_valid(isbn) => isbn,
            _ => return Err(BookError::InvalidIsbn),
        };
        if self.store.exists_by_isbn(isbn)? {
            return Err(BookError::DuplicateIsbn {
                isbn: isbn.to_string(),
            });
        }
        Ok(())
    }
}

/// Produce the updated record: mutable fields are taken from the patch only
/// where the patch carries a value; a `None` patch field means "leave
/// unchanged". Identity fields (`id`, `isbn`) are always retained from the
/// existing record, whatever the patch says.
fn merge_patch(existing: BookRecord, patch: &BookRecord) -> BookRecord {
    BookRecord {
        id: existing.id,
        isbn: existing.isbn,
        author: patch.author.clone().or(existing.author),
        title: patch.title.clone().or(existing.title),
        description: patch.description.clone().or(existing.description),
        book_type: patch.book_type.or(existing.book_type),
        stock_count: patch.stock_count.or(existing.stock_count),
    }
}
