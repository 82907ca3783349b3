//! An HTTP resource representing a single todo, identified by its ID.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::{
    api::{self, validation::TodoTitle, Json, Path, Response},
    todos::{Todo, TodoId, TodoPatch},
    AppState,
};

/// Gets a todo.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn get(State(state): State<AppState>, Path(id): Path<TodoId>) -> Response<Todo> {
    let Some(todo) = state.todos.get(id).await else {
        return Err(api::Error::TodoNotFound(id));
    };

    Ok((StatusCode::OK, Json(todo)))
}

/// A `PUT` request body for this API route. Omitted fields are left unchanged.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PutRequest {
    /// The todo's new title.
    pub title: Option<TodoTitle>,

    /// Whether the todo has been done.
    pub is_completed: Option<bool>,
}

impl From<PutRequest> for TodoPatch {
    fn from(request: PutRequest) -> Self {
        Self {
            title: request.title.map(TodoTitle::into_inner),
            is_completed: request.is_completed,
        }
    }
}

/// Updates the specified fields of a todo.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn put(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(body): Json<PutRequest>,
) -> Response<Todo> {
    let Some(todo) = state.todos.update(id, body.into()).await else {
        return Err(api::Error::TodoNotFound(id));
    };

    Ok((StatusCode::OK, Json(todo)))
}

/// Deletes a todo. Its ID is never reused.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Response<DeleteResponse> {
    if !state.todos.remove(id).await {
        return Err(api::Error::TodoNotFound(id));
    }

    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Todo deleted successfully",
        }),
    ))
}

/// A `DELETE` response body for this API route.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// A confirmation that the todo was deleted.
    pub message: &'static str,
}
