mod models;
mod schema;
mod store;
mod trait_def;

pub use models::{BookRecord, BookType};
pub use schema::BOOK_VERSIONED_SCHEMAS;
pub use store::SqliteBookStore;
pub use trait_def::BookStore;
