use crate::{
    error::AppError,
    models::{Contact, ContactInfo},
};
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

pub async fn create_contact(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateContactRequest>,
) -> Result<Json<Contact>, AppError> {
    let contact = sqlx::query_as::<_, Contact>(
        "INSERT INTO contacts (name, email, phone, message, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, name, email, phone, message, created_at, updated_at",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.message)
    .bind(Utc::now())
    .fetch_one(&pool)
    .await?;

    Ok(Json(contact))
}

pub async fn get_contacts(State(pool): State<SqlitePool>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = sqlx::query_as::<_, Contact>(
        "SELECT id, name, email, phone, message, created_at, updated_at FROM contacts",
    )
    .fetch_all(&pool)
    .await?;

    println!("{:?}", contacts);

    Ok(Json(contacts))
}

// The newest row stands in for the current record; older rows are kept but
// never served.
pub async fn get_contact_info(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<ContactInfo>>, AppError> {
    let contact_info = sqlx::query_as::<_, ContactInfo>(
        "SELECT id, address, phone, email, website, created_at, updated_at
         FROM contact_info
         ORDER BY id DESC
         LIMIT 1",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(contact_info))
}

#[derive(Deserialize)]
pub struct CreateContactInfoRequest {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

pub async fn create_contact_info(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateContactInfoRequest>,
) -> Result<Json<ContactInfo>, AppError> {
    let contact_info = sqlx::query_as::<_, ContactInfo>(
        "INSERT INTO contact_info (address, phone, email, website, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, address, phone, email, website, created_at, updated_at",
    )
    .bind(&payload.address)
    .bind(&payload.phone)
    .bind(&payload.email)
    .bind(&payload.website)
    .bind(Utc::now())
    .fetch_one(&pool)
    .await?;

    Ok(Json(contact_info))
}
