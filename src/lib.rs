//! Book Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod book_store;
pub mod books;
pub mod isbn;
pub mod server;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use book_store::{BookRecord, BookStore, BookType, SqliteBookStore};
pub use books::{BookError, BookLocation, BookManager};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
