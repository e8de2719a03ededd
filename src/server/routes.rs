use axum::{
    extract::{Path, Query, State},
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use crate::server::AppState;
use crate::storage::SqliteStore;
use crate::todo::{ToDo, ToDoDraft};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Check out a storage handle scoped to the current request
///
/// The connection is dropped when the handler returns, on every exit path.
fn open_store(state: &AppState) -> Result<SqliteStore, ApiError> {
    SqliteStore::open(&state.database_path)
        .map_err(|e| internal_error("opening database", &e))
}

/// Log a failed operation with its context and hide the detail from the
/// caller behind a generic 500 body
fn internal_error(context: &str, err: &crate::Error) -> ApiError {
    tracing::error!("Error {}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: "Internal Server Error".to_string() }),
    )
}

/// Expected outcome for an absent id, not logged as an error
fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse { error: "ToDo not found".to_string() }),
    )
}

pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ToDoDraft>,
) -> Result<Json<ToDo>, ApiError> {
    let mut store = open_store(&state)?;
    let todo = store
        .create_todo(&draft)
        .map_err(|e| internal_error("creating todo", &e))?;
    Ok(Json(todo))
}

pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ToDo>>, ApiError> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(100);

    let store = open_store(&state)?;
    let todos = store
        .list_todos(skip, limit)
        .map_err(|e| internal_error("listing todos", &e))?;
    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ToDo>, ApiError> {
    let store = open_store(&state)?;
    let todo = store
        .get_todo(id)
        .map_err(|e| internal_error(&format!("reading todo {id}"), &e))?
        .ok_or_else(not_found)?;
    Ok(Json(todo))
}

pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<ToDoDraft>,
) -> Result<Json<ToDo>, ApiError> {
    let mut store = open_store(&state)?;
    let todo = store
        .update_todo(id, &draft)
        .map_err(|e| internal_error(&format!("updating todo {id}"), &e))?
        .ok_or_else(not_found)?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ToDo>, ApiError> {
    let mut store = open_store(&state)?;
    let todo = store
        .delete_todo(id)
        .map_err(|e| internal_error(&format!("deleting todo {id}"), &e))?
        .ok_or_else(not_found)?;
    Ok(Json(todo))
}
