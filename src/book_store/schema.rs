//! SQLite schema for the book catalog database.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

/// Books table. The id is the integer rowid; the ISBN is the natural key and
/// carries a UNIQUE constraint so duplicate inserts fail at the store level
/// even when two writers race past the engine's existence check.
const BOOKS_TABLE: Table = Table {
    name: "books",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("author", &SqlType::Text),
        sqlite_column!("title", &SqlType::Text),
        sqlite_column!("isbn", &SqlType::Text, non_null = true),
        sqlite_column!("description", &SqlType::Text),
        sqlite_column!("book_type", &SqlType::Text),
        sqlite_column!("stock_count", &SqlType::Integer),
    ],
    indices: &[
        ("idx_books_isbn", "isbn"),
        ("idx_books_author", "author"),
    ],
    unique_constraints: &[&["isbn"]],
};

pub const BOOK_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 1,
    tables: &[BOOKS_TABLE],
    migration: None,
}];
