//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use board_cache::{RedisMessageCache, RedisPool, RedisPoolConfig};
use board_common::{AppConfig, AppError, ConfigError};
use board_db::{create_pool, PgMessageStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize the real backends and create AppState
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = board_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config).await.map_err(AppError::database)?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(AppError::cache)?;
    info!("Redis connection established");

    let store = Arc::new(PgMessageStore::new(pool));
    let cache = Arc::new(RedisMessageCache::new(redis_pool));

    Ok(AppState::new(store, cache))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await.map_err(AppError::internal)?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config.http.address().parse().map_err(|_| {
        AppError::Config(ConfigError::InvalidValue(
            "HTTP_HOST/HTTP_PORT",
            config.http.address(),
        ))
    })?;

    let state = create_app_state(&config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
