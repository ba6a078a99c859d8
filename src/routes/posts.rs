use crate::{
    error::AppError,
    models::{Author, Category, Post, Tag},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub body: Option<String>,
    pub category: Option<Category>,
    pub author: Option<Author>,
    pub tags: Vec<Tag>,
}

// Resolve the category, author and tag set for one post. A category_id or
// author_id that names no row simply yields None.
async fn with_relations(pool: &SqlitePool, post: Post) -> Result<PostResponse, AppError> {
    let category = match post.category_id {
        Some(id) => {
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?
        }
        None => None,
    };

    let author = match post.author_id {
        Some(id) => {
            sqlx::query_as::<_, Author>(
                "SELECT id, name, image, profession, description FROM authors WHERE id = ?",
            )
            .bind(id)
            .fetch_optional(pool)
            .await?
        }
        None => None,
    };

    let tags = sqlx::query_as::<_, Tag>(
        "SELECT t.id, t.name FROM tags t
         JOIN post_tags pt ON pt.tag_id = t.id
         WHERE pt.post_id = ?
         ORDER BY t.id",
    )
    .bind(post.id)
    .fetch_all(pool)
    .await?;

    Ok(PostResponse {
        id: post.id,
        title: post.title,
        image: post.image,
        body: post.body,
        category,
        author,
        tags,
    })
}

pub async fn get_posts(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = sqlx::query_as::<_, Post>(
        "SELECT id, title, image, body, category_id, author_id FROM posts",
    )
    .fetch_all(&pool)
    .await?;

    let mut response = Vec::new();
    for post in posts {
        response.push(with_relations(&pool, post).await?);
    }

    Ok(Json(response))
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub image: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

pub async fn create_post(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    let mut tx = pool.begin().await?;

    let post = sqlx::query_as::<_, Post>(
        "INSERT INTO posts (title, image, body, category_id, author_id)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, title, image, body, category_id, author_id",
    )
    .bind(&payload.title)
    .bind(&payload.image)
    .bind(&payload.body)
    .bind(payload.category_id)
    .bind(payload.author_id)
    .fetch_one(&mut *tx)
    .await?;

    // Tag ids that match no existing tag are dropped, not rejected.
    for tag_id in &payload.tag_ids {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(tag) = tag {
            sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                .bind(post.id)
                .bind(tag.id)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    let response = with_relations(&pool, post).await?;

    Ok(Json(response))
}
