//! The HTTP API for managing todos.

mod routes;
pub(crate) mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::{FromRequest, FromRequestParts};
use serde::Serialize;
use strum_macros::IntoStaticStr;
use thiserror::Error;

use crate::todos::TodoId;

pub(crate) use routes::router;

/// An API error.
#[derive(Error, IntoStaticStr, Debug)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Error {
    /// The request body couldn't be read.
    #[error("{message}")]
    BodyUnreadable {
        /// The status code the underlying rejection asked for.
        status: StatusCode,

        /// A description of why the body couldn't be read.
        message: String,
    },

    /// The request body is missing a JSON `Content-Type` header.
    #[error("Expected request with `Content-Type: application/json`.")]
    JsonContentType,

    /// The request body is syntactically valid JSON but doesn't match the expected shape.
    #[error("{0}")]
    JsonData(String),

    /// The request body isn't syntactically valid JSON.
    #[error("{0}")]
    JsonSyntax(String),

    /// A path parameter couldn't be parsed.
    #[error("{0}")]
    InvalidPathParameter(String),

    /// No todo has the requested ID.
    #[error("Todo with ID {0} not found")]
    TodoNotFound(TodoId),

    /// The requested API route doesn't exist.
    #[error("The requested API route doesn't exist.")]
    RouteNotFound,

    /// An unexpected error occurred while handling the request.
    #[error("An internal server error occurred.")]
    Internal(String),
}

impl Error {
    /// Gets the response status code corresponding to this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyUnreadable { status, .. } => *status,
            Self::JsonContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::JsonData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::JsonSyntax(_) | Self::InvalidPathParameter(_) => StatusCode::BAD_REQUEST,
            Self::TodoNotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Gets the machine-readable code identifying this kind of error, e.g. `TODO_NOT_FOUND`.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(error) => Self::JsonData(error.body_text()),
            JsonRejection::JsonSyntaxError(error) => Self::JsonSyntax(error.body_text()),
            JsonRejection::MissingJsonContentType(_) => Self::JsonContentType,
            rejection => Self::BodyUnreadable {
                status: rejection.status(),
                message: rejection.body_text(),
            },
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(error) => {
                Self::InvalidPathParameter(error.body_text())
            }
            rejection => Self::Internal(rejection.body_text()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        if let Self::Internal(ref details) = self {
            tracing::error!(%details, "request failed");
        }

        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// The JSON body of an error response.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// The error's code, e.g. `TODO_NOT_FOUND`.
    error: &'static str,

    /// A human-readable description of the error.
    message: String,
}

/// Equivalent to [`axum::Json`], but fails with an [`Error`] response body instead of plain text.
#[derive(FromRequest, Clone, Copy, Default, Debug)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Equivalent to [`axum::extract::Path`], but fails with an [`Error`] response body instead of
/// plain text.
#[derive(FromRequestParts, Clone, Copy, Default, Debug)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// The result of an API route handler.
pub type Response<T> = Result<(StatusCode, Json<T>), Error>;
