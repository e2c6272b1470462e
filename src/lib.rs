pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod state;
pub mod validation;

use axum::Router;
use config::Config;
use db::{FeedbackStore, MemoryFeedbackStore, PgFeedbackStore, schema::ensure_schema};
use errors::AppError;
use middleware::{cors_layer, trace_layer};
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(http::create_http_routes(state))
        .layer(cors_layer(config.allowed_origins.clone()))
        .layer(trace_layer())
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
}

async fn connect_store(config: &Config) -> Result<Arc<dyn FeedbackStore>, AppError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, feedback is kept in memory only");
        return Ok(Arc::new(MemoryFeedbackStore::new()));
    };

    let postgres = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .map_err(|e| AppError::Startup(format!("Failed to connect to Postgres: {}", e)))?;

    ensure_schema(&postgres)
        .await
        .map_err(|e| AppError::Startup(format!("Failed to prepare schema: {}", e)))?;

    Ok(Arc::new(PgFeedbackStore::new(postgres)))
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("feedback_be=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let store = connect_store(&config).await?;
    let app = create_app(AppState::new(store), &config);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Startup(format!("Failed to bind {}: {}", address, e)))?;

    tracing::info!("Feedback server running at http://{}/feedback", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Startup(format!("Server error: {}", e)))
}
