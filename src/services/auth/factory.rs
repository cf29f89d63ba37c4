/// Factory: build the `TokenVerifier` from application `Config`.
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{JwksClient, TokenVerifier};

pub fn build_verifier(config: &Config) -> Result<Arc<TokenVerifier>, AppError> {
    // Auth0 convention: issuer is the tenant domain with a trailing slash,
    // keys are published under /.well-known/jwks.json.
    let issuer = format!("https://{}/", config.auth_domain);
    let jwks_url = format!("https://{}/.well-known/jwks.json", config.auth_domain);

    let jwks = JwksClient::new(
        jwks_url,
        Duration::from_secs(config.jwks_fetch_timeout_seconds),
        Duration::from_secs(config.jwks_cache_ttl_seconds),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "failed to build JWKS http client");
        AppError::Internal
    })?;

    Ok(Arc::new(TokenVerifier::new(
        jwks,
        config.auth_audience.clone(),
        issuer,
        config.access_token_leeway_seconds,
    )))
}
