use crate::{error::AppError, models::Comment};
use axum::{extract::State, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

pub async fn get_comments(State(pool): State<SqlitePool>) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, post_id, name, email, website, message, image FROM comments",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(comments))
}

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub message: Option<String>,
}

// post_id is stored as given; no check that the post exists.
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (post_id, name, email, website, message)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, post_id, name, email, website, message, image",
    )
    .bind(payload.post_id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.website)
    .bind(&payload.message)
    .fetch_one(&pool)
    .await?;

    Ok(Json(comment))
}
