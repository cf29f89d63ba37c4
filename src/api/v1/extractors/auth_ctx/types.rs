/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The guard verifies and stores it in request extensions; handlers only
 *   ever receive this type, never a raw token
 */

use crate::services::auth::Claims;

/// Context attached to a request that passed the token guard.
///
/// - `sub` is the identity provider's subject (e.g. `auth0|...`)
/// - `permissions` is the verified RBAC list from the token
/// - `claims` is the full decoded payload, exactly as the token presented it
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub sub: String,
    pub permissions: Vec<String>,
    pub claims: Claims,
}

impl AuthCtx {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            sub: claims.sub.clone(),
            permissions: claims.permissions.clone().unwrap_or_default(),
            claims,
        }
    }
}
