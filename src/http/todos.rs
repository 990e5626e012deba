//! Handlers for the owner-scoped todo routes.

use super::extract::{ApiJson, ApiPath};
use super::{ApiError, AppState, Caller};
use crate::model::{Todo, TodoCreate, TodoId, TodoPatch};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;

pub async fn list_todos(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.todos(caller.principal()).await?))
}

pub async fn get_todo(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<u32>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.todos.todo(caller.principal(), TodoId(id)).await?))
}

pub async fn create_todo(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(params): ApiJson<TodoCreate>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Todo>), ApiError> {
    let todo = state.todos.create_todo(caller.principal(), params).await?;
    let location = format!("/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<u32>,
    ApiJson(patch): ApiJson<TodoPatch>,
) -> Result<StatusCode, ApiError> {
    state
        .todos
        .update_todo(caller.principal(), TodoId(id), patch)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_todo(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<u32>,
) -> Result<StatusCode, ApiError> {
    state.todos.delete_todo(caller.principal(), TodoId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
