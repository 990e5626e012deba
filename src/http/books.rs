//! Handlers for the public books routes.

use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::{ApiError, AppState};
use crate::model::{Book, BookCreate, BookId, BookQuery, BookUpdate};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use serde::Deserialize;

/// Query string of `DELETE /delete-book`.
#[derive(Debug, Deserialize)]
pub struct DeleteBook {
    pub book_id: u32,
}

pub async fn list_books(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.books.books(query).await?))
}

pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(state.books.book(BookId(id)).await?))
}

pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<BookCreate>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Book>), ApiError> {
    let book = state.books.create_book(params).await?;
    let location = format!("/books/{}", book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

pub async fn update_book(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<BookUpdate>,
) -> Result<StatusCode, ApiError> {
    state.books.update_book(update).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_book(
    State(state): State<AppState>,
    ApiQuery(target): ApiQuery<DeleteBook>,
) -> Result<StatusCode, ApiError> {
    state.books.delete_book(BookId(target.book_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
