//! First step of the verification pipeline: pull the token out of the
//! `Authorization` header without trusting anything else about it.

use crate::services::auth::AuthError;

/// Extract the token substring from a raw `Authorization` header value.
///
/// Accepts exactly `Bearer <token>` (scheme is case-insensitive). Anything
/// else is rejected before the token is even looked at:
/// - no header at all → `MissingHeader`
/// - wrong scheme, missing token segment, or extra segments → `MalformedHeader`
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingHeader)?;

    let mut segments = value.split_whitespace();

    let scheme = segments.next().ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }

    let token = segments.next().ok_or(AuthError::MalformedHeader)?;

    if segments.next().is_some() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!(extract_bearer_token(None), Err(AuthError::MissingHeader));
    }

    #[test]
    fn empty_header_is_malformed() {
        assert_eq!(extract_bearer_token(Some("")), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert_eq!(
            extract_bearer_token(Some("Basic abc123")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn scheme_without_token_is_malformed() {
        assert_eq!(
            extract_bearer_token(Some("Bearer")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn extra_segments_are_malformed() {
        assert_eq!(
            extract_bearer_token(Some("Bearer abc def")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(extract_bearer_token(Some("bearer tok")), Ok("tok"));
        assert_eq!(extract_bearer_token(Some("BEARER tok")), Ok("tok"));
        assert_eq!(extract_bearer_token(Some("Bearer tok")), Ok("tok"));
    }

    #[test]
    fn token_is_returned_verbatim() {
        assert_eq!(
            extract_bearer_token(Some("Bearer eyJhbGciOiJSUzI1NiJ9.e30.sig")),
            Ok("eyJhbGciOiJSUzI1NiJ9.e30.sig")
        );
    }
}
