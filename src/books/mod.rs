mod error;
mod manager;

pub use error::BookError;
pub use manager::{BookLocation, BookManager};
