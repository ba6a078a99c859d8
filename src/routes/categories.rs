use crate::{error::AppError, models::Category};
use axum::{extract::State, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

pub async fn get_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
        .fetch_all(&pool)
        .await?;

    Ok(Json(categories))
}

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

pub async fn create_category(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES (?) RETURNING id, name",
    )
    .bind(&payload.name)
    .fetch_one(&pool)
    .await?;

    Ok(Json(category))
}
