//! Administrative todo routes. Every handler here requires the admin role.

use super::extract::ApiPath;
use super::{ApiError, AppState, Caller};
use crate::model::{Todo, TodoId};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

pub async fn list_all_todos(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.admin_todos(caller.principal()).await?))
}

pub async fn delete_any_todo(
    State(state): State<AppState>,
    caller: Caller,
    ApiPath(id): ApiPath<u32>,
) -> Result<StatusCode, ApiError> {
    state
        .todos
        .admin_delete(caller.principal(), TodoId(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
