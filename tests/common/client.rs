//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with methods for every book-catalog endpoint. When routes or
//! request formats change, update only this file.

use super::constants::REQUEST_TIMEOUT_SECS;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /v1/books
    pub async fn get_books(&self) -> Response {
        self.client
            .get(format!("{}/v1/books", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/books/{id}
    pub async fn get_book(&self, id: i64) -> Response {
        self.client
            .get(format!("{}/v1/books/{}", self.base_url, id))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/books/isbn/{isbn}
    pub async fn get_book_by_isbn(&self, isbn: &str) -> Response {
        self.client
            .get(format!("{}/v1/books/isbn/{}", self.base_url, isbn))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/books/author/{author}
    pub async fn get_books_by_author(&self, author: &str) -> Response {
        self.client
            .get(format!("{}/v1/books/author/{}", self.base_url, author))
            .send()
            .await
            .expect("Request failed")
    }

    /// POST /v1/books
    pub async fn create_book(&self, book: &Value) -> Response {
        self.client
            .post(format!("{}/v1/books", self.base_url))
            .json(book)
            .send()
            .await
            .expect("Request failed")
    }

    /// POST /v1/books/batch
    pub async fn create_books(&self, books: &Value) -> Response {
        self.client
            .post(format!("{}/v1/books/batch", self.base_url))
            .json(books)
            .send()
            .await
            .expect("Request failed")
    }

    /// PUT /v1/books (id taken from the payload)
    pub async fn update_book(&self, patch: &Value) -> Response {
        self.client
            .put(format!("{}/v1/books", self.base_url))
            .json(patch)
            .send()
            .await
            .expect("Request failed")
    }

    /// PUT /v1/books/{id}
    pub async fn update_book_by_id(&self, id: i64, patch: &Value) -> Response {
        self.client
            .put(format!("{}/v1/books/{}", self.base_url, id))
            .json(patch)
            .send()
            .await
            .expect("Request failed")
    }

    /// PUT /v1/books/isbn/{isbn}
    pub async fn update_book_by_isbn(&self, isbn: &str, patch: &Value) -> Response {
        self.client
            .put(format!("{}/v1/books/isbn/{}", self.base_url, isbn))
            .json(patch)
            .send()
            .await
            .expect("Request failed")
    }

    /// Convenience: a complete, valid book payload with the given ISBN.
    pub fn sample_book(isbn: &str, author: &str) -> Value {
        json!({
            "author": author,
            "title": "Harry Potter and the Philosopher's Stone",
            "isbn": isbn,
            "description": "First book of Harry Potter adventures",
            "book_type": "PHYSICAL",
            "stock_count": 15
        })
    }
}
