//! Router configuration and server setup.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Health
        .route("/api/health", get(handlers::health))
        // Data
        .route("/api/chart", get(handlers::chart))
        .route("/api/panels", get(handlers::panels))
        .fallback(handlers::not_found)
        // Apply middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}

/// Starts the display-session server.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving page on http://{}", addr);
    axum::serve(listener, create_router(state)).await
}
