//! Static Host
//!
//! Serves the compiled dashboard page, built with axum.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status, uptime and whether the page bundle is present
//! - anything else - files from the bundle directory, `index.html` when
//!   no file matches
//!
//! # Example
//!
//! ```rust,ignore
//! use skyboard::config::Config;
//! use skyboard::server::{serve, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _report) = Config::load_default();
//!     serve(ServerState::new(config.server)).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router: health probes plus the page bundle
pub fn build_router(state: ServerState) -> Router {
    let dist = state.dist_dir();
    let index = dist.join("index.html");
    let pages = ServeDir::new(&dist).fallback(ServeFile::new(index));

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::full_health));

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the static host
pub async fn serve(state: ServerState) -> ServerResult<()> {
    let addr = state.config.addr();
    if !state.dist_available() {
        tracing::warn!(
            dist_dir = %state.config.dist_dir,
            "Page bundle not found; build skyboard-ui first"
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Skyboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Skyboard shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
