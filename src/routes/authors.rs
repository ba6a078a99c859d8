use crate::{error::AppError, models::Author};
use axum::{extract::State, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

pub async fn get_authors(State(pool): State<SqlitePool>) -> Result<Json<Vec<Author>>, AppError> {
    let authors = sqlx::query_as::<_, Author>(
        "SELECT id, name, image, profession, description FROM authors",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(authors))
}

#[derive(Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub image: Option<String>,
    pub profession: Option<String>,
    pub description: Option<String>,
}

pub async fn create_author(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateAuthorRequest>,
) -> Result<Json<Author>, AppError> {
    let author = sqlx::query_as::<_, Author>(
        "INSERT INTO authors (name, image, profession, description)
         VALUES (?, ?, ?, ?)
         RETURNING id, name, image, profession, description",
    )
    .bind(&payload.name)
    .bind(&payload.image)
    .bind(&payload.profession)
    .bind(&payload.description)
    .fetch_one(&pool)
    .await?;

    Ok(Json(author))
}
