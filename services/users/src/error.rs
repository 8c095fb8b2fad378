use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use userbase_core::error::render_error;

use crate::domain::validator::FieldError;

/// Users service domain error variants.
///
/// The `Display` text is the user-facing message; internal detail carried by
/// `Persistence` and `Internal` is logged, never sent.
#[derive(Debug, thiserror::Error)]
pub enum UsersServiceError {
    #[error("Validation error. Please check the input data and try again.")]
    InvalidField(#[from] FieldError),
    #[error("Validation error. Please check the input data and try again.")]
    InvalidPayload(#[from] validator::ValidationErrors),
    #[error("Bad request. Please check your request and try again.")]
    BadRequest,
    #[error("The user by provided ID does not exist.")]
    UserNotFound,
    #[error("The user with the same login already exists. Please fix login and try again.")]
    LoginTaken,
    #[error("Something went wrong while saving data. Please try again later.")]
    Persistence(#[source] anyhow::Error),
    #[error("Access denied.")]
    Forbidden,
    #[error("Something went wrong. Please contact the support service.")]
    Internal(#[from] anyhow::Error),
}

impl UsersServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::InvalidPayload(_) => "INVALID_PAYLOAD",
            Self::BadRequest => "BAD_REQUEST",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::LoginTaken => "LOGIN_TAKEN",
            Self::Persistence(_) => "PERSISTENCE",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidField(_) | Self::InvalidPayload(_) | Self::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::LoginTaken | Self::Persistence(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Re-signal a store failure on a read path as an unexpected error.
    pub fn into_internal(self) -> Self {
        match self {
            Self::Persistence(e) => Self::Internal(e),
            other => other,
        }
    }
}

impl IntoResponse for UsersServiceError {
    fn into_response(self) -> Response {
        // 4xx are expected client errors; TraceLayer already records them.
        match &self {
            Self::Persistence(e) | Self::Internal(e) => {
                tracing::error!(error = ?e, kind = self.kind(), "request failed");
            }
            Self::InvalidField(reason) => {
                tracing::debug!(reason = %reason, "field validation failed");
            }
            _ => {}
        }
        render_error(self.status(), &self.to_string())
    }
}
