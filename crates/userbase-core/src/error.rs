//! Plain-text error rendering shared by every handler.
//!
//! Services map their domain errors to a status code and a user-facing message,
//! then call [`render_error`] to build the response.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

pub const ACCESS_DENIED_MESSAGE: &str =
    "Access denied. You have no permissions for this operation.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong during the request processing.";

/// Build a `text/plain` error response.
///
/// 400, 404, 422 and 500 echo `message`. 403 always answers with
/// [`ACCESS_DENIED_MESSAGE`]. Every other status is coerced to 500 with
/// [`GENERIC_FAILURE_MESSAGE`].
pub fn render_error(status: StatusCode, message: &str) -> Response {
    let (status, body) = match status {
        StatusCode::BAD_REQUEST
        | StatusCode::NOT_FOUND
        | StatusCode::UNPROCESSABLE_ENTITY
        | StatusCode::INTERNAL_SERVER_ERROR => (status, message.to_owned()),
        StatusCode::FORBIDDEN => (status, ACCESS_DENIED_MESSAGE.to_owned()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            GENERIC_FAILURE_MESSAGE.to_owned(),
        ),
    };
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    render_error(
        StatusCode::NOT_FOUND,
        "The requested resource does not exist.",
    )
}
