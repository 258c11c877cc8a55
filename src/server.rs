/// Server setup and initialization
///
/// Wires together the sample context registry and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_preview_routes, create_sample_routes, AppState},
    config::{load_sample_context, Config},
    preview::SampleContextRegistry,
};
use anyhow::Result;
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Create the main Axum application with all routes
///
/// Loads the configured sample context (if any) and builds the router.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("📊 Initializing sample context registry");
    let samples = match load_sample_context(&config.preview)? {
        Some(context) => SampleContextRegistry::with_context(context)
            .map_err(|e| anyhow::anyhow!("Failed to install configured sample context: {}", e))?,
        None => {
            tracing::info!("📦 Using built-in sample fixture");
            SampleContextRegistry::new()
        }
    };

    let app = create_router(AppState {
        samples: Arc::new(samples),
    });

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Build the HTTP router over an existing application state
pub fn create_router(state: AppState) -> Router {
    tracing::info!("📡 Creating HTTP router with all endpoints");
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))

        // Detection, interpolation and preview endpoints
        .merge(create_preview_routes())

        // Sample context management
        .merge(create_sample_routes())
        .with_state(state)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting flowpreview server...");

    // Create the application
    let app = create_app(config.clone()).await?;

    // Bind to the configured address
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    // Start the server
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
