use blog_backend::config::AppConfig;
use blog_backend::{db, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppConfig::load().expect("Failed to load config.toml");

    let pool = db::setup_database(&settings).await?;
    let state = AppState {
        db: pool,
        config: settings.clone(),
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();

    Ok(())
}
