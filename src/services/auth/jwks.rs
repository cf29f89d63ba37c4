/*
 * Responsibility
 * - Fetch the identity provider's JWKS document over HTTPS
 * - Cache it process-wide with a TTL so hot paths do not hammer the provider
 */
use std::time::{Duration, Instant};

use jsonwebtoken::jwk::JwkSet;
use tokio::sync::RwLock;

use crate::services::auth::AuthError;

#[derive(Debug, Clone)]
struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Client for the provider's `/.well-known/jwks.json` endpoint.
///
/// The fetch carries an explicit timeout; a slow or unreachable provider is
/// reported as `KeySetUnavailable` after a bounded wait, never hangs the
/// request. A TTL of zero disables the cache entirely.
#[derive(Debug)]
pub struct JwksClient {
    jwks_url: String,
    http: reqwest::Client,
    cache_ttl: Duration,
    cache: RwLock<Option<CachedKeys>>,
}

impl JwksClient {
    pub fn new(
        jwks_url: String,
        fetch_timeout: Duration,
        cache_ttl: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(fetch_timeout).build()?;

        Ok(Self {
            jwks_url,
            http,
            cache_ttl,
            cache: RwLock::new(None),
        })
    }

    pub fn jwks_url(&self) -> &str {
        &self.jwks_url
    }

    /// Return the key set, fetching it if the cached copy is stale or absent.
    pub async fn get(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.is_fresh(self.cache_ttl)
            {
                return Ok(cached.keys.clone());
            }
        }

        let keys = self.fetch().await?;

        {
            let mut cache = self.cache.write().await;
            *cache = Some(CachedKeys {
                keys: keys.clone(),
                fetched_at: Instant::now(),
            });
        }

        Ok(keys)
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!(jwks_url = %self.jwks_url, "fetching JWKS");

        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::KeySetUnavailable(format!(
                "JWKS endpoint returned status {}",
                response.status()
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("invalid JWKS body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(ttl_seconds: u64) -> JwksClient {
        JwksClient::new(
            "https://tenant.example.com/.well-known/jwks.json".to_string(),
            Duration::from_secs(10),
            Duration::from_secs(ttl_seconds),
        )
        .unwrap()
    }

    #[test]
    fn cached_keys_fresh_within_ttl() {
        let cached = CachedKeys {
            keys: JwkSet { keys: vec![] },
            fetched_at: Instant::now(),
        };
        assert!(cached.is_fresh(Duration::from_secs(600)));
    }

    #[test]
    fn cached_keys_stale_with_zero_ttl() {
        // TTL 0 means "never fresh", i.e. caching disabled.
        let cached = CachedKeys {
            keys: JwkSet { keys: vec![] },
            fetched_at: Instant::now(),
        };
        assert!(!cached.is_fresh(Duration::ZERO));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_key_set_unavailable() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let client = JwksClient::new(
            "http://192.0.2.1/.well-known/jwks.json".to_string(),
            Duration::from_millis(50),
            Duration::ZERO,
        )
        .unwrap();

        match client.get().await {
            Err(AuthError::KeySetUnavailable(_)) => {}
            other => panic!("expected KeySetUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn url_is_kept_as_configured() {
        assert_eq!(
            client(600).jwks_url(),
            "https://tenant.example.com/.well-known/jwks.json"
        );
    }
}
