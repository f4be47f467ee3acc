//! Error responses.
//!
//! Two policies coexist:
//! - blog and destination handlers let failures propagate as
//!   [`UnhandledError`], which answers with an opaque 500;
//! - the user handlers catch failures themselves and answer with
//!   [`message_response`], exposing the raw error text on 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// A failure nobody handled. Logged in full, answered with a generic 500.
#[derive(Debug)]
pub struct UnhandledError(anyhow::Error);

impl<E> From<E> for UnhandledError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for UnhandledError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "unhandled error while serving request");
        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            INTERNAL_SERVER_ERROR,
        )
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// `{"message": ...}` body used by the user handlers.
pub fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "message": message.into() }))).into_response()
}
