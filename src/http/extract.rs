//! Extractors whose rejections answer like every other failed request: 422 with a
//! `{"detail": ...}` body.
//!
//! axum's own `Path`, `Query` and `Json` reply with plain text and a mix of 400, 415 and
//! 422. Handlers take these wrappers instead.

use super::ApiError;
use async_trait::async_trait;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// Path parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiPath<T>(pub T);

/// Query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiQuery<T>(pub T);

/// JSON request body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiJson<T>(pub T);

fn unprocessable(body_text: String) -> ApiError {
    debug!(detail = %body_text, "Request rejected");
    ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, body_text)
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        unprocessable(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        unprocessable(rejection.body_text())
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
