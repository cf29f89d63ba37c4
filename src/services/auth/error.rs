/*
 * Responsibility
 * - One variant per way a bearer token can be rejected
 * - Carries the machine-readable code; the HTTP mapping lives in error.rs
 */
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authorization header is missing")]
    MissingHeader,

    #[error("authorization header must be of the form 'Bearer <token>'")]
    MalformedHeader,

    #[error("could not fetch the signing key set: {0}")]
    KeySetUnavailable(String),

    #[error("token header is unparseable or not signed with RS256")]
    InvalidHeader,

    #[error("no signing key matches the token 'kid'")]
    KeyNotFound,

    #[error("token has expired")]
    TokenExpired,

    #[error("token audience or issuer does not match this API")]
    ClaimsInvalid,

    #[error("token signature verification failed")]
    SignatureInvalid,

    #[error("token carries no permissions")]
    PermissionsMissing,

    #[error("permission '{0}' is required")]
    PermissionDenied(String),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
            Self::KeySetUnavailable(_) => "key_set_unavailable",
            Self::InvalidHeader => "invalid_header",
            Self::KeyNotFound => "key_not_found",
            Self::TokenExpired => "token_expired",
            Self::ClaimsInvalid => "claims_invalid",
            Self::SignatureInvalid => "signature_invalid",
            Self::PermissionsMissing => "permissions_missing",
            Self::PermissionDenied(_) => "permission_denied",
        }
    }
}
