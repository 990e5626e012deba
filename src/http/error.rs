use crate::book_actor::BookError;
use crate::model::ValidationError;
use crate::todo_actor::TodoError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// An error response: a status and a `{"detail": ...}` body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    fn internal(cause: &dyn std::error::Error) -> Self {
        error!(error = %cause, "Request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    }
}

impl From<BookError> for ApiError {
    fn from(e: BookError) -> Self {
        match e {
            BookError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Book not found"),
            BookError::Validation(v) => v.into(),
            BookError::Storage(_) | BookError::ActorCommunicationError(_) => Self::internal(&e),
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Todo not found"),
            TodoError::Unauthorized(reason) => Self::new(StatusCode::UNAUTHORIZED, reason),
            TodoError::Validation(v) => v.into(),
            TodoError::Storage(_) | TodoError::ActorCommunicationError(_) => Self::internal(&e),
        }
    }
}
