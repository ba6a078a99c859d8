pub mod authors;
pub mod categories;
pub mod comments;
pub mod contacts;
pub mod posts;
pub mod tags;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories/",
            get(categories::get_categories).post(categories::create_category),
        )
        .route("/tags/", get(tags::get_tags).post(tags::create_tag))
        .route(
            "/authors/",
            get(authors::get_authors).post(authors::create_author),
        )
        .route("/posts/", get(posts::get_posts).post(posts::create_post))
        .route(
            "/comments/",
            get(comments::get_comments).post(comments::create_comment),
        )
        .route("/contacts/", post(contacts::create_contact))
        .route("/contacts_get/", get(contacts::get_contacts))
        .route("/contact_info/", get(contacts::get_contact_info))
        .route("/contact_info_create/", post(contacts::create_contact_info))
        .with_state(state)
}
