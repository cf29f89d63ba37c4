/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone-cheap by construction (pool and verifier are Arc-backed)
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::services::auth::TokenVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(db: PgPool, verifier: Arc<TokenVerifier>) -> Self {
        Self { db, verifier }
    }
}
