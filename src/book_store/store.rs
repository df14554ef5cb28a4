//! SQLite-backed book store implementation.

use super::models::{BookRecord, BookType};
use super::schema::BOOK_VERSIONED_SCHEMAS;
use super::trait_def::BookStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

pub struct SqliteBookStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBookStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let is_new_db = !path.exists();

        let conn = Connection::open(path).context("Failed to open book database")?;

        if is_new_db {
            info!("Creating new book database at {:?}", path);
            BOOK_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
        } else {
            let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
            let db_version = raw_version - BASE_DB_VERSION as i64;

            let schema = BOOK_VERSIONED_SCHEMAS
                .iter()
                .find(|s| s.version as i64 == db_version)
                .with_context(|| format!("Unknown book database version {}", db_version))?;
            schema.validate(&conn).with_context(|| {
                format!(
                    "Book database schema validation failed for version {}",
                    db_version
                )
            })?;
        }

        let book_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened book catalog with {} books", book_count);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn row_to_book(row: &rusqlite::Row) -> rusqlite::Result<BookRecord> {
        let book_type: Option<String> = row.get("book_type")?;
        Ok(BookRecord {
            id: row.get("id")?,
            author: row.get("author")?,
            title: row.get("title")?,
            isbn: row.get("isbn")?,
            description: row.get("description")?,
            book_type: book_type.as_deref().and_then(BookType::parse),
            stock_count: row.get("stock_count")?,
        })
    }

    /// Insert or upsert a single book on an open connection. Shared between
    /// `save` and the `save_all` transaction.
    fn persist_book(conn: &Connection, book: &BookRecord) -> Result<BookRecord> {
        let book_type = book.book_type.map(|t| t.to_db_str());
        let id = match book.id {
            Some(id) => {
                conn.execute(
                    "INSERT INTO books (id, author, title, isbn, description, book_type, stock_count)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                     ON CONFLICT(id) DO UPDATE SET
                        author = excluded.author,
                        title = excluded.title,
                        isbn = excluded.isbn,
                        description = excluded.description,
                        book_type = excluded.book_type,
                        stock_count = excluded.stock_count",
                    params![
                        id,
                        book.author,
                        book.title,
                        book.isbn,
                        book.description,
                        book_type,
                        book.stock_count
                    ],
                )?;
                id
            }
            None => {
                conn.execute(
                    "INSERT INTO books (author, title, isbn, description, book_type, stock_count)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        book.author,
                        book.title,
                        book.isbn,
                        book.description,
                        book_type,
                        book.stock_count
                    ],
                )?;
                conn.last_insert_rowid()
            }
        };
        Ok(BookRecord {
            id: Some(id),
            ..book.clone()
        })
    }
}

impl BookStore for SqliteBookStore {
    fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>> {
        let conn = self.conn.lock().unwrap();
        let book = conn
            .query_row("SELECT * FROM books WHERE id = ?1", params![id], |row| {
                Self::row_to_book(row)
            })
            .optional()?;
        Ok(book)
    }

    fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>> {
        let conn = self.conn.lock().unwrap();
        let book = conn
            .query_row(
                "SELECT * FROM books WHERE isbn = ?1",
                params![isbn],
                |row| Self::row_to_book(row),
            )
            .optional()?;
        Ok(book)
    }

    fn find_by_author(&self, author: &str) -> Result<Vec<BookRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare_cached("SELECT * FROM books WHERE author = ?1 ORDER BY id")?;
        let books = stmt
            .query_map(params![author], |row| Self::row_to_book(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    fn find_all(&self) -> Result<Vec<BookRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached("SELECT * FROM books ORDER BY id")?;
        let books = stmt
            .query_map([], |row| Self::row_to_book(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    fn exists_by_id(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let exists = conn
            .query_row("SELECT 1 FROM books WHERE id = ?1", params![id], |_| {
                Ok(true)
            })
            .optional()?;
        Ok(exists.unwrap_or(false))
    }

    fn exists_by_isbn(&self, isbn: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let exists = conn
            .query_row("SELECT 1 FROM books WHERE isbn = ?1", params![isbn], |_| {
                Ok(true)
            })
            .optional()?;
        Ok(exists.unwrap_or(false))
    }

    fn save(&self, book: &BookRecord) -> Result<BookRecord> {
        let conn = self.conn.lock().unwrap();
        Self::persist_book(&conn, book)
    }

    fn save_all(&self, books: &[BookRecord]) -> Result<Vec<BookRecord>> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let mut saved = Vec::with_capacity(books.len());
        for book in books {
            saved.push(Self::persist_book(&tx, book)?);
        }
        tx.commit()?;
        Ok(saved)
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(())
    }
}
