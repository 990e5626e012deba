use super::{admin, books, todos, AppState};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Build the axum router with every books, todos and admin route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/books", get(books::list_books))
        .route("/books/:book_id", get(books::get_book))
        .route("/create-book", post(books::create_book))
        .route("/update-book", put(books::update_book))
        .route("/delete-book", delete(books::delete_book))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/:todo_id",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/admin/todos", get(admin::list_all_todos))
        .route("/admin/todo/:todo_id", delete(admin::delete_any_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
