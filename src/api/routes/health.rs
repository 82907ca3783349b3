//! A liveness check for load balancers and orchestrators.

use axum::http::StatusCode;
use axum_macros::debug_handler;
use serde::Serialize;

use crate::api::{Json, Response};

/// Reports that the server is up.
///
/// # Errors
///
/// Never fails.
#[expect(clippy::unused_async, reason = "Axum route handlers must be async")]
#[debug_handler]
pub async fn get() -> Response<GetResponse> {
    Ok((StatusCode::OK, Json(GetResponse { status: "ok" })))
}

/// A `GET` response body for this API route.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    /// Always `"ok"`.
    pub status: &'static str,
}
