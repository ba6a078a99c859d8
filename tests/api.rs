use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use blog_backend::{config::AppConfig, db, routes, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

// Single-connection pool so every request sees the same in-memory database.
async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::create_schema(&pool).await.unwrap();

    let state = AppState {
        db: pool,
        config: AppConfig {
            database_url: "sqlite::memory:".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
        },
    };

    routes::create_router(state)
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, "GET", path, None).await
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", path, Some(body)).await
}

#[tokio::test]
async fn list_endpoints_return_empty_arrays_when_no_rows_exist() {
    let app = test_app().await;

    for path in [
        "/categories/",
        "/tags/",
        "/authors/",
        "/posts/",
        "/comments/",
        "/contacts_get/",
        "/contact_info/",
    ] {
        let (status, body) = get(&app, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, json!([]), "{path}");
    }
}

#[tokio::test]
async fn created_category_gets_an_id_and_shows_up_in_the_list() {
    let app = test_app().await;

    let (status, created) = post(&app, "/categories/", json!({ "name": "rust" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "rust");
    assert!(created["id"].as_i64().is_some());

    let (status, listed) = get(&app, "/categories/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn duplicate_category_name_surfaces_as_server_error() {
    let app = test_app().await;

    let (status, _) = post(&app, "/categories/", json!({ "name": "rust" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(&app, "/categories/", json!({ "name": "rust" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Something went wrong");
}

#[tokio::test]
async fn missing_required_field_is_rejected_as_unprocessable() {
    let app = test_app().await;

    let (status, _) = post(&app, "/categories/", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn author_optional_fields_default_to_null() {
    let app = test_app().await;

    let (status, created) = post(&app, "/authors/", json!({ "name": "ana" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "ana");
    assert_eq!(created["image"], Value::Null);
    assert_eq!(created["profession"], Value::Null);
    assert_eq!(created["description"], Value::Null);

    let (_, listed) = get(&app, "/authors/").await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn post_keeps_only_tag_ids_that_exist() {
    let app = test_app().await;

    let (_, first) = post(&app, "/tags/", json!({ "name": "rust" })).await;
    let (_, second) = post(&app, "/tags/", json!({ "name": "web" })).await;

    let (status, created) = post(
        &app,
        "/posts/",
        json!({
            "title": "Hello",
            "tag_ids": [first["id"], second["id"], 99999]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["tags"], json!([first, second]));
    assert_eq!(created["category"], Value::Null);
    assert_eq!(created["author"], Value::Null);
}

#[tokio::test]
async fn post_embeds_its_category_and_author() {
    let app = test_app().await;

    let (_, category) = post(&app, "/categories/", json!({ "name": "news" })).await;
    let (_, author) = post(&app, "/authors/", json!({ "name": "bob" })).await;

    let (status, created) = post(
        &app,
        "/posts/",
        json!({
            "title": "Launch",
            "image": "launch.png",
            "body": "We shipped.",
            "category_id": category["id"],
            "author_id": author["id"],
            "tag_ids": []
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["category"], category);
    assert_eq!(created["author"], author);
    assert_eq!(created["tags"], json!([]));

    let (_, listed) = get(&app, "/posts/").await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn post_with_dangling_category_id_is_accepted() {
    let app = test_app().await;

    let (status, created) = post(
        &app,
        "/posts/",
        json!({ "title": "Orphan", "category_id": 4242, "tag_ids": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["category"], Value::Null);
}

#[tokio::test]
async fn comment_with_dangling_post_id_is_accepted_and_listed() {
    let app = test_app().await;

    let (status, created) = post(
        &app,
        "/comments/",
        json!({
            "post_id": 777,
            "name": "carol",
            "email": "carol@example.com"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["post_id"], 777);
    assert_eq!(created["website"], Value::Null);
    assert_eq!(created["image"], Value::Null);

    let (_, listed) = get(&app, "/comments/").await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn contact_round_trips_with_a_server_set_timestamp() {
    let app = test_app().await;

    let (status, created) = post(
        &app,
        "/contacts/",
        json!({
            "name": "dave",
            "email": "dave@example.com",
            "phone": "555-0100",
            "message": "hi"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "dave");
    assert!(created["created_at"].is_string());
    assert_eq!(created["updated_at"], Value::Null);

    let (status, listed) = get(&app, "/contacts_get/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn contact_info_read_returns_only_the_latest_row() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/contact_info_create/",
        json!({
            "address": "1 Old St",
            "phone": "555-0001",
            "email": "old@example.com",
            "website": "old.example.com"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, second) = post(
        &app,
        "/contact_info_create/",
        json!({
            "address": "2 New Ave",
            "phone": "555-0002",
            "email": "new@example.com",
            "website": "new.example.com"
        }),
    )
    .await;

    let (status, listed) = get(&app, "/contact_info/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([second]));
    assert_eq!(listed[0]["address"], "2 New Ave");
}
