/*
 * Responsibility
 * - /drinks CRUD handlers
 * - The permission guard runs before any of the protected ones; they receive
 *   the verified context through AuthCtxExtractor
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::drinks::{
            CreateDrinkRequest, DeleteResponse, DrinkLong, DrinkShort, DrinksResponse, Ingredient,
            ShortIngredient, UpdateDrinkRequest,
        },
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::drink_repo,
    state::AppState,
};

fn parse_recipe(row: &drink_repo::DrinkRow) -> Result<Vec<Ingredient>, AppError> {
    serde_json::from_str(&row.recipe).map_err(|e| {
        // A row we cannot parse means we stored something broken earlier.
        tracing::error!(drink_id = row.drink_id, error = %e, "stored recipe is not valid JSON");
        AppError::Internal
    })
}

fn row_to_long(row: drink_repo::DrinkRow) -> Result<DrinkLong, AppError> {
    let recipe = parse_recipe(&row)?;
    Ok(DrinkLong {
        id: row.drink_id,
        title: row.title,
        recipe,
    })
}

fn row_to_short(row: drink_repo::DrinkRow) -> Result<DrinkShort, AppError> {
    let recipe = parse_recipe(&row)?;
    Ok(DrinkShort {
        id: row.drink_id,
        title: row.title,
        recipe: recipe.iter().map(ShortIngredient::from).collect(),
    })
}

fn encode_recipe(recipe: &[Ingredient]) -> Result<String, AppError> {
    serde_json::to_string(recipe).map_err(|_| AppError::Internal)
}

/// GET /drinks — public menu, short representation.
pub async fn list_drinks(
    State(state): State<AppState>,
) -> Result<Json<DrinksResponse<DrinkShort>>, AppError> {
    let rows = drink_repo::list(&state.db).await.map_err(|e| {
        tracing::error!(error = %e, "drink_repo::list failed");
        AppError::Internal
    })?;

    let mut drinks = Vec::with_capacity(rows.len());
    for row in rows {
        drinks.push(row_to_short(row)?);
    }

    Ok(Json(DrinksResponse {
        success: true,
        drinks,
    }))
}

/// GET /drinks-detail — requires `get:drinks-detail`.
pub async fn list_drinks_detail(
    State(state): State<AppState>,
    AuthCtxExtractor(_auth): AuthCtxExtractor,
) -> Result<Json<DrinksResponse<DrinkLong>>, AppError> {
    let rows = drink_repo::list(&state.db).await.map_err(|e| {
        tracing::error!(error = %e, "drink_repo::list failed");
        AppError::Internal
    })?;

    let mut drinks = Vec::with_capacity(rows.len());
    for row in rows {
        drinks.push(row_to_long(row)?);
    }

    Ok(Json(DrinksResponse {
        success: true,
        drinks,
    }))
}

/// POST /drinks — requires `post:drinks`.
pub async fn create_drink(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Json(req): Json<CreateDrinkRequest>,
) -> Result<(StatusCode, Json<DrinksResponse<DrinkLong>>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("invalid_drink", msg))?;

    let recipe = encode_recipe(&req.recipe)?;

    let row = drink_repo::create(&state.db, &req.title, &recipe)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "drink_repo::create failed");
            AppError::Internal
        })?;

    tracing::info!(sub = %auth.sub, drink_id = row.drink_id, "drink created");

    Ok((
        StatusCode::CREATED,
        Json(DrinksResponse {
            success: true,
            drinks: vec![row_to_long(row)?],
        }),
    ))
}

/// PATCH /drinks/{drink_id} — requires `patch:drinks`, 404 when absent.
pub async fn update_drink(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(drink_id): Path<i64>,
    Json(req): Json<UpdateDrinkRequest>,
) -> Result<Json<DrinksResponse<DrinkLong>>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("invalid_drink", msg))?;

    let recipe = match &req.recipe {
        Some(recipe) => Some(encode_recipe(recipe)?),
        None => None,
    };

    let row = drink_repo::update(&state.db, drink_id, req.title.as_deref(), recipe.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "drink_repo::update failed");
            AppError::Internal
        })?
        .ok_or(AppError::not_found("drink"))?;

    tracing::info!(sub = %auth.sub, drink_id, "drink updated");

    Ok(Json(DrinksResponse {
        success: true,
        drinks: vec![row_to_long(row)?],
    }))
}

/// DELETE /drinks/{drink_id} — requires `delete:drinks`, 404 when absent.
pub async fn delete_drink(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(drink_id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = drink_repo::delete(&state.db, drink_id).await.map_err(|e| {
        tracing::error!(error = %e, "drink_repo::delete failed");
        AppError::Internal
    })?;

    if !deleted {
        return Err(AppError::not_found("drink"));
    }

    tracing::info!(sub = %auth.sub, drink_id, "drink deleted");

    Ok(Json(DeleteResponse {
        success: true,
        delete: drink_id,
    }))
}
