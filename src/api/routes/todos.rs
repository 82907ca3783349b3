//! An HTTP resource representing the set of all todos.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::Deserialize;

use crate::{
    api::{validation::TodoTitle, Json, Response},
    todos::Todo,
    AppState,
};

pub mod todo;

/// Lists every todo in the order they were created.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn get(State(state): State<AppState>) -> Response<Vec<Todo>> {
    Ok((StatusCode::OK, Json(state.todos.list().await)))
}

/// A `POST` request body for this API route.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostRequest {
    /// The new todo's title.
    pub title: TodoTitle,
}

/// Creates a new incomplete todo.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn post(
    State(state): State<AppState>,
    Json(body): Json<PostRequest>,
) -> Response<Todo> {
    let todo = state.todos.create(body.title.into_inner()).await;

    Ok((StatusCode::CREATED, Json(todo)))
}
