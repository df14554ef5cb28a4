//! Book catalog models.

use serde::{Deserialize, Serialize};

/// Physical form of a catalog entry.
///
/// Stored in the database and serialized on the wire as `PHYSICAL`,
/// `E_BOOK` and `AUDIOBOOK`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookType {
    Physical,
    EBook,
    Audiobook,
}

impl BookType {
    /// Parse from the database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PHYSICAL" => Some(BookType::Physical),
            "E_BOOK" => Some(BookType::EBook),
            "AUDIOBOOK" => Some(BookType::Audiobook),
            _ => None,
        }
    }

    /// Convert to the database string representation.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BookType::Physical => "PHYSICAL",
            BookType::EBook => "E_BOOK",
            BookType::Audiobook => "AUDIOBOOK",
        }
    }
}

/// A single book catalog entry.
///
/// Every field is optional on the wire so the same shape serves both full
/// records and partial update patches. The id is assigned by the store on
/// first save and immutable afterwards; the ISBN is the natural key, required
/// and unique for stored records.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub book_type: Option<BookType>,
    #[serde(default)]
    pub stock_count: Option<i64>,
}
