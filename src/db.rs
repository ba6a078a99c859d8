use crate::config::AppConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

// Replayed on every startup; all statements are IF NOT EXISTS.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(212) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(212) NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS authors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(212) NOT NULL UNIQUE,
        image TEXT,
        profession VARCHAR(212),
        description TEXT
    )",
    // category_id/author_id carry no REFERENCES clause: dangling ids are
    // accepted rather than rejected.
    "CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(212) NOT NULL,
        image TEXT,
        body TEXT,
        category_id INTEGER,
        author_id INTEGER
    )",
    "CREATE INDEX IF NOT EXISTS idx_posts_title ON posts (title)",
    "CREATE TABLE IF NOT EXISTS post_tags (
        post_id INTEGER NOT NULL,
        tag_id INTEGER NOT NULL,
        PRIMARY KEY (post_id, tag_id)
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        post_id INTEGER NOT NULL,
        name VARCHAR(212) NOT NULL,
        email VARCHAR(212) NOT NULL,
        website VARCHAR(212),
        message TEXT,
        image TEXT
    )",
    "CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(212) NOT NULL,
        email TEXT NOT NULL,
        phone VARCHAR(212) NOT NULL,
        message TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS contact_info (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        address VARCHAR(212) NOT NULL,
        phone VARCHAR(212) NOT NULL,
        email TEXT NOT NULL,
        website TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    )",
];

// Setup the database and make sure the schema exists
pub async fn setup_database(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    create_schema(&pool).await?;
    println!("Schema ensured");

    Ok(pool)
}

pub async fn create_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
