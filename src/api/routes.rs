//! All routes for the HTTP API.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{api, AppState};

pub mod health;
pub mod todos;

/// Builds the API router, with every route sharing the specified state.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::get))
        .route("/todos", get(todos::get).post(todos::post))
        .route(
            "/todos/:id",
            get(todos::todo::get)
                .put(todos::todo::put)
                .delete(todos::todo::delete),
        )
        .fallback(|| async { api::Error::RouteNotFound })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
