/*
 * Responsibility
 * - v1 URL structure
 * - One sub-router per required permission; the public surface carries no guard
 */
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::middleware::auth::require_permission;
use crate::state::AppState;

use crate::api::v1::handlers::{
    drinks::{create_drink, delete_drink, list_drinks, list_drinks_detail, update_drink},
    health::health,
};

pub fn routes(state: &AppState) -> Router<AppState> {
    let verifier = &state.verifier;

    let public = Router::new()
        .route("/health", get(health))
        .route("/drinks", get(list_drinks));

    let detail = require_permission(
        Router::new().route("/drinks-detail", get(list_drinks_detail)),
        verifier.clone(),
        "get:drinks-detail",
    );

    let create = require_permission(
        Router::new().route("/drinks", post(create_drink)),
        verifier.clone(),
        "post:drinks",
    );

    let update = require_permission(
        Router::new().route("/drinks/{drink_id}", patch(update_drink)),
        verifier.clone(),
        "patch:drinks",
    );

    let remove = require_permission(
        Router::new().route("/drinks/{drink_id}", delete(delete_drink)),
        verifier.clone(),
        "delete:drinks",
    );

    public
        .merge(detail)
        .merge(create)
        .merge(update)
        .merge(remove)
}
