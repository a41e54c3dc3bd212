//! Unified error handling for admin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::fixtures::FixtureError;
use crate::store::StoreError;

/// Application-level error type for the admin API.
///
/// Empty scoped views and deletes of absent ids are not errors and never
/// reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session store rejected a write.
    #[error("Conflict: {0}")]
    Store(#[from] StoreError),

    /// Fixture data could not be loaded.
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Internal(_) | Self::Fixture(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        } else {
            tracing::debug!(error = %self, "Admin request rejected");
        }

        let status = match &self {
            Self::Internal(_) | Self::Fixture(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) | Self::Fixture(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
