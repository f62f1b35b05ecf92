use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{models::ErrorBody, repository::RepositoryError};

/// AppError
///
/// The error kinds a handler can surface. Wrong codes, wrong passwords and
/// unknown sessions are not errors: they are ordinary responses with
/// `success = false` / `hasAccess = false`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, malformed, unknown or expired admin bearer token.
    #[error("{0}")]
    Unauthorized(String),

    /// A body or path segment that could not be decoded. Carries the status
    /// axum chose for the rejection (400, 415 or 422).
    #[error("{detail}")]
    InvalidRequest { status: StatusCode, detail: String },

    /// Unknown category, or an item index outside the category.
    #[error("{0}")]
    NotFound(String),

    /// Anything unexpected. Logged, never shown to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::CategoryNotFound(_) => {
                AppError::NotFound("Catégorie non trouvée".to_string())
            }
            RepositoryError::ItemNotFound { .. } => AppError::NotFound("Item non trouvé".to_string()),
            RepositoryError::Unavailable(reason) => AppError::Internal(reason),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            AppError::InvalidRequest { status, detail } => (*status, detail.clone()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
