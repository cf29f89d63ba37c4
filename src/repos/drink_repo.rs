/*
 * Responsibility
 * - drinks CRUD
 * - recipe is stored as a JSON string; shaping into short/long
 *   representations happens in the handler layer
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DrinkRow {
    #[sqlx(rename = "drinkId")]
    pub drink_id: i64,

    pub title: String,
    pub recipe: String,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn list(pool: &PgPool) -> anyhow::Result<Vec<DrinkRow>> {
    let rows = sqlx::query_as::<_, DrinkRow>(
        r#"
        SELECT
            "drinkId", title, recipe, "createdAt", "updatedAt"
        FROM drinks
        ORDER BY "drinkId"
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn create(pool: &PgPool, title: &str, recipe: &str) -> anyhow::Result<DrinkRow> {
    let row = sqlx::query_as::<_, DrinkRow>(
        r#"
        INSERT INTO drinks (title, recipe)
        VALUES ($1, $2)
        RETURNING
            "drinkId", title, recipe, "createdAt", "updatedAt"
        "#,
    )
    .bind(title)
    .bind(recipe)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    drink_id: i64,
    title: Option<&str>,
    recipe: Option<&str>,
) -> anyhow::Result<Option<DrinkRow>> {
    let row = sqlx::query_as::<_, DrinkRow>(
        r#"
        UPDATE drinks
        SET
            title = COALESCE($2, title),
            recipe = COALESCE($3, recipe),
            "updatedAt" = now()
        WHERE "drinkId" = $1
        RETURNING
            "drinkId", title, recipe, "createdAt", "updatedAt"
        "#,
    )
    .bind(drink_id)
    .bind(title)
    .bind(recipe)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete(pool: &PgPool, drink_id: i64) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM drinks
        WHERE "drinkId" = $1
        "#,
    )
    .bind(drink_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
