// SPDX-FileCopyrightText: 2026 Portafolio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Portafolio HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the public site.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use portafolio_config::model::PortafolioConfig;
use portafolio_core::{PortafolioError, StorageAdapter};
use portafolio_service::{ContactIntake, QueryService};

use crate::handlers;
use crate::render::Renderer;

/// Largest accepted request body. The contact form is the only one.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    pub query: QueryService,
    pub intake: ContactIntake,
    /// Used directly only by the health probe.
    pub storage: Arc<dyn StorageAdapter>,
    pub renderer: Arc<Renderer>,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Wire services and the template renderer around an initialized storage.
    pub fn new(
        storage: Arc<dyn StorageAdapter>,
        config: &PortafolioConfig,
    ) -> Result<Self, PortafolioError> {
        Ok(Self {
            query: QueryService::new(storage.clone()),
            intake: ContactIntake::new(storage.clone()),
            storage,
            renderer: Arc::new(Renderer::new(&config.site, &config.media)?),
            start_time: Instant::now(),
        })
    }
}

/// Build the router with every public route:
/// - GET /, POST / (home page and contact form)
/// - GET /proyectos/ (all active projects)
/// - GET /health
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_index).post(handlers::post_index))
        .route("/proyectos/", get(handlers::get_projects))
        .route("/health", get(handlers::get_health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind_address:port` and serve until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn start_server(
    bind_address: &str,
    port: u16,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), PortafolioError> {
    let addr = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PortafolioError::Internal(format!("failed to bind {addr}: {e}")))?;

    info!("Portafolio listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| PortafolioError::Internal(format!("server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}
