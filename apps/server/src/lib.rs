pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::SqliteBlobStore;

pub use crate::state::AppState;

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Word routes
        .route("/api/words", get(routes::words::list).post(routes::words::create))
        .route(
            "/api/words/:id",
            get(routes::words::get).delete(routes::words::delete),
        )
        // Quiz routes
        .route("/api/quiz", axum::routing::delete(routes::quiz::exit))
        .route("/api/quiz/start", post(routes::quiz::start))
        .route("/api/quiz/next", post(routes::quiz::next))
        .route("/api/quiz/answer", post(routes::quiz::answer))
        // Stats routes
        .route("/api/stats", get(routes::stats::get))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Opening vocabulary database at {}", config.db_path.display());
    let store = SqliteBlobStore::open(&config.db_path)?;
    let state = AppState::new(store);

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
