//! Book endpoints
//!
//! Each handler owns its status-code and message contract: body-parse
//! failures are 422 on create but 500 on update, a missing id is a 500, and
//! every store-level failure, not-found included, is a 400. Clients match on
//! these exact codes and messages.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, CreateBook, UpdateBook},
};

/// Response carrying only an outcome message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response carrying the full book list
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub message: String,
    pub data: Vec<Book>,
}

/// Response carrying a single book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

fn message(text: &str) -> MessageResponse {
    MessageResponse {
        message: text.to_string(),
    }
}

/// Reject an empty path id before touching the store.
fn require_id(id: &str) -> AppResult<()> {
    if id.trim().is_empty() {
        return Err(AppError::MissingParameter("id cannot be empty".to_string()));
    }
    Ok(())
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/create_books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = MessageResponse),
        (status = 422, description = "Request body could not be read", body = ErrorResponse),
        (status = 400, description = "Store rejected the insert", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Result<Json<CreateBook>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(book) = payload.map_err(|err| {
        tracing::debug!(error = %err, "rejected create payload");
        AppError::UnprocessableBody("request failed".to_string())
    })?;

    let id = state.repository.books.create(&book).await.map_err(|err| {
        tracing::error!(error = %err, "book insert failed");
        AppError::Store("could not create book".to_string())
    })?;

    tracing::debug!(id, "book created");

    Ok(Json(message("book has been added")))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BookListResponse),
        (status = 400, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BookListResponse>> {
    let books = state.repository.books.find_all().await.map_err(|err| {
        tracing::error!(error = %err, "book listing failed");
        AppError::Store("Could not get books".to_string())
    })?;

    Ok(Json(BookListResponse {
        message: "books fetched successfully".to_string(),
        data: books,
    }))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/get_books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "The matching book", body = BookResponse),
        (status = 500, description = "Missing id", body = ErrorResponse),
        (status = 400, description = "No matching book or store failure", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    require_id(&id)?;

    let book = state.repository.books.find_one(&id).await.map_err(|err| {
        tracing::debug!(%id, error = %err, "book lookup failed");
        AppError::Store("could not get the book".to_string())
    })?;

    Ok(Json(BookResponse {
        message: "book id fetched successfully".to_string(),
        data: book,
    }))
}

/// Update a book by id
#[utoipa::path(
    put,
    path = "/update_book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 500, description = "Request body could not be read", body = ErrorResponse),
        (status = 400, description = "No matching book", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBook>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(changes) = payload.map_err(|err| {
        tracing::debug!(error = %err, "rejected update payload");
        AppError::InvalidBody("your update data not valid".to_string())
    })?;

    // An empty id matches nothing and falls into the zero-rows path below.
    let rows = state
        .repository
        .books
        .update_where(&id, &changes)
        .await
        .map_err(|err| {
            tracing::error!(%id, error = %err, "book update failed");
            AppError::Store("failed to update because invalid id".to_string())
        })?;

    if rows == 0 {
        return Err(AppError::Store(
            "failed to update because invalid id".to_string(),
        ));
    }

    Ok(Json(message("successfully update data")))
}

/// Delete a book by id
#[utoipa::path(
    delete,
    path = "/delete_book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted (or nothing matched)", body = MessageResponse),
        (status = 500, description = "Missing id", body = ErrorResponse),
        (status = 400, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    require_id(&id)?;

    // Matching zero rows is still a successful delete.
    let rows = state
        .repository
        .books
        .delete_where(&id)
        .await
        .map_err(|err| {
            tracing::error!(%id, error = %err, "book delete failed");
            AppError::Store("could not delete book".to_string())
        })?;

    tracing::debug!(%id, rows, "book delete applied");

    Ok(Json(message("book delete successfully")))
}
