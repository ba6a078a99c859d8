use crate::{error::AppError, models::Tag};
use axum::{extract::State, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

pub async fn get_tags(State(pool): State<SqlitePool>) -> Result<Json<Vec<Tag>>, AppError> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags")
        .fetch_all(&pool)
        .await?;

    Ok(Json(tags))
}

#[derive(Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

pub async fn create_tag(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<Json<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES (?) RETURNING id, name")
        .bind(&payload.name)
        .fetch_one(&pool)
        .await?;

    Ok(Json(tag))
}
