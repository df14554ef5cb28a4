//! HTTP layer: maps engine outcomes 1:1 to status codes.
//!
//! The handlers hold no business logic; every rule lives in
//! [`BookManager`] and the store behind it.

use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use crate::books::{BookError, BookManager};
use crate::book_store::BookRecord;

use super::state::{GuardedBookManager, ServerState};
use super::{log_requests, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

#[derive(Serialize)]
struct BatchCreated {
    created: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

fn error_response(err: BookError) -> Response {
    let status = match &err {
        BookError::NotFound => StatusCode::NOT_FOUND,
        BookError::DuplicateIsbn { .. } => StatusCode::CONFLICT,
        BookError::BatchEntry { source, .. }
            if matches!(**source, BookError::DuplicateIsbn { .. }) =>
        {
            StatusCode::CONFLICT
        }
        BookError::InvalidIsbn
        | BookError::DuplicateIsbnInBatch
        | BookError::MissingIdentifier
        | BookError::BatchEntry { .. } => StatusCode::BAD_REQUEST,
        BookError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        // store failures are logged but not leaked to the client
        error!("Store error: {}", err);
        return status.into_response();
    }

    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

async fn get_books(State(manager): State<GuardedBookManager>) -> Response {
    match manager.get_all() {
        Ok(books) if books.is_empty() => StatusCode::NO_CONTENT.into_response(),
        Ok(books) => Json(books).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_book_by_id(
    State(manager): State<GuardedBookManager>,
    Path(id): Path<i64>,
) -> Response {
    match manager.get_by_id(id) {
        Ok(book) => Json(book).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_book_by_isbn(
    State(manager): State<GuardedBookManager>,
    Path(isbn): Path<String>,
) -> Response {
    match manager.get_by_isbn(&isbn) {
        Ok(book) => Json(book).into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_books_by_author(
    State(manager): State<GuardedBookManager>,
    Path(author): Path<String>,
) -> Response {
    match manager.get_by_author(&author) {
        Ok(books) => Json(books).into_response(),
        Err(err) => error_response(err),
    }
}

async fn post_book(
    State(manager): State<GuardedBookManager>,
    Json(book): Json<BookRecord>,
) -> Response {
    match manager.create_book(book) {
        Ok(location) => (
            StatusCode::CREATED,
            [(header::LOCATION, location.path.clone())],
            Json(location),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn post_books(
    State(manager): State<GuardedBookManager>,
    Json(books): Json<Vec<BookRecord>>,
) -> Response {
    match manager.create_books(books) {
        Ok(created) => (StatusCode::CREATED, Json(BatchCreated { created })).into_response(),
        Err(err) => error_response(err),
    }
}

/// Update keyed by the id carried in the payload itself.
async fn put_book(
    State(manager): State<GuardedBookManager>,
    Json(patch): Json<BookRecord>,
) -> Response {
    let id = patch.id;
    match manager.update_by_id(patch, id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(err),
    }
}

async fn put_book_by_id(
    State(manager): State<GuardedBookManager>,
    Path(id): Path<i64>,
    Json(patch): Json<BookRecord>,
) -> Response {
    match manager.update_by_id(patch, Some(id)) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(err),
    }
}

async fn put_book_by_isbn(
    State(manager): State<GuardedBookManager>,
    Path(isbn): Path<String>,
    Json(patch): Json<BookRecord>,
) -> Response {
    match manager.update_by_isbn(patch, &isbn) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(err),
    }
}

pub fn make_app(config: ServerConfig, manager: Arc<BookManager>) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        manager,
    };

    let book_routes: Router = Router::new()
        .route("/", get(get_books))
        .route("/", post(post_book))
        .route("/", put(put_book))
        .route("/batch", post(post_books))
        .route("/{id}", get(get_book_by_id))
        .route("/{id}", put(put_book_by_id))
        .route("/isbn/{isbn}", get(get_book_by_isbn))
        .route("/isbn/{isbn}", put(put_book_by_isbn))
        .route("/author/{author}", get(get_books_by_author))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/v1/books", book_routes)
        .layer(middleware::from_fn_with_state(config, log_requests))
}

pub async fn run_server(
    manager: Arc<BookManager>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, manager);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
