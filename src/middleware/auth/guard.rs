//! Composed request guard: header extraction → verify/decode → authorize,
//! then hand the verified context to the handler via request extensions.
//!
//! Each protected route names the permission it needs; the guard runs once
//! per request and aborts with a classified failure that error.rs turns into
//! the JSON 401/403 body.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{self, TokenVerifier};
use crate::state::AppState;

#[derive(Clone)]
struct Guard {
    verifier: Arc<TokenVerifier>,
    permission: &'static str,
}

/// Protect every route already registered on `router` with `permission`.
///
/// Example:
/// ```ignore
/// let create = require_permission(
///     Router::new().route("/drinks", post(create_drink)),
///     verifier.clone(),
///     "post:drinks",
/// );
/// ```
pub fn require_permission(
    router: Router<AppState>,
    verifier: Arc<TokenVerifier>,
    permission: &'static str,
) -> Router<AppState> {
    let guard = Guard {
        verifier,
        permission,
    };

    // route_layer (not layer) so unmatched paths still produce 404, not 401.
    router.route_layer(middleware::from_fn_with_state(guard, guard_middleware))
}

async fn guard_middleware(
    State(guard): State<Guard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let raw_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = auth::extract_bearer_token(raw_header)?;

    let claims = match guard.verifier.verify(token).await {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                error = %err,
                code = err.code(),
                "access token verification failed"
            );
            return Err(err.into());
        }
    };

    if let Err(err) = auth::authorize(guard.permission, &claims) {
        tracing::warn!(
            sub = %claims.sub,
            permission = guard.permission,
            code = err.code(),
            "permission check failed"
        );
        return Err(err.into());
    }

    // guard → extractor handoff
    req.extensions_mut().insert(AuthCtx::from_claims(claims));

    Ok(next.run(req).await)
}
