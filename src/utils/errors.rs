//! Operational error type for the request pipeline.
//!
//! Every stage of the pipeline (extractors, role gates, handlers) signals
//! failure by returning an [`AppError`]. The variant set is closed so the
//! status/message classification is exhaustive at compile time; the terminal
//! error-handling middleware (see [`crate::middleware::error_handler`]) turns
//! the error into the single JSON envelope clients see.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// A classified, expected failure with an associated HTTP status.
///
/// Unexpected failures are wrapped in [`AppError::Internal`] and surface
/// as 500s.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    AuthenticationRequired,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    InvalidId(String),
    #[error("{0}")]
    DuplicateField(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Misconfiguration(String),
    #[error("{0}")]
    Internal(Error),
}

impl AppError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_field(msg: impl Into<String>) -> Self {
        Self::DuplicateField(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn misconfiguration(msg: impl Into<String>) -> Self {
        Self::Misconfiguration(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationRequired | Self::InvalidToken | Self::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateField(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Misconfiguration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing message after reclassification. Classified kinds map
    /// to fixed strings; the carried detail is kept for logs only.
    pub fn public_message(&self) -> String {
        match self {
            Self::AuthenticationRequired => "Authentication required".to_string(),
            Self::InvalidToken => "Invalid token".to_string(),
            Self::TokenExpired => "Token expired".to_string(),
            Self::Validation(_) => "Validation Error".to_string(),
            Self::InvalidId(_) => "Invalid ID format".to_string(),
            Self::DuplicateField(_) => "Duplicate field value".to_string(),
            Self::Forbidden(msg) | Self::NotFound(msg) | Self::Misconfiguration(msg) => msg.clone(),
            Self::Internal(err) => err.to_string(),
        }
    }

    /// Debug-rendered detail chain. Exposed as the `stack` field of the
    /// error envelope outside of production.
    pub fn stack(&self) -> String {
        match self {
            Self::Internal(err) => format!("{err:?}"),
            other => format!("{other:?}"),
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self::Internal(err)
    }
}

/// Carried through response extensions so the terminal middleware can log
/// the original detail and build the error envelope.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    /// Client-facing message after reclassification
    pub message: String,
    /// The raw carried message, kept for logs only
    pub detail: String,
    pub stack: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = ErrorDetails {
            message: self.public_message(),
            detail: self.to_string(),
            stack: self.stack(),
        };

        // Minimal body in case the terminal middleware is not installed
        // (unit tests exercising a handler directly). The middleware
        // replaces this with the full envelope.
        let mut response = (
            status,
            Json(json!({
                "success": false,
                "error": { "message": details.message }
            })),
        )
            .into_response();

        response.extensions_mut().insert(details);
        response
    }
}
