/*
 * Responsibility
 * - App-wide ApiError definition
 * - IntoResponse impl (HTTP status / JSON error body)
 * - Translate auth failures into 401/403/503 uniformly
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

/// Authentication failures are 401, permission failures are 403. An
/// unreachable key set is the provider's fault, not the caller's, so it
/// surfaces as 503.
fn auth_status(e: &AuthError) -> StatusCode {
    match e {
        AuthError::PermissionsMissing | AuthError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        AuthError::KeySetUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::UNAUTHORIZED,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{resource} not found."),
            ),
            AppError::Auth(e) => (auth_status(&e), e.code(), e.to_string()),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_server_error",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_failures_are_forbidden() {
        assert_eq!(
            auth_status(&AuthError::PermissionsMissing),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            auth_status(&AuthError::PermissionDenied("post:drinks".into())),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn authentication_failures_are_unauthorized() {
        for e in [
            AuthError::MissingHeader,
            AuthError::MalformedHeader,
            AuthError::InvalidHeader,
            AuthError::KeyNotFound,
            AuthError::TokenExpired,
            AuthError::ClaimsInvalid,
            AuthError::SignatureInvalid,
        ] {
            assert_eq!(auth_status(&e), StatusCode::UNAUTHORIZED, "{e:?}");
        }
    }

    #[test]
    fn key_set_outage_is_service_unavailable() {
        assert_eq!(
            auth_status(&AuthError::KeySetUnavailable("timeout".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
