// ABOUTME: HTTP server assembly and lifecycle for the recommendation API
// ABOUTME: Merges domain routes, applies tracing and CORS layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, NutritionRoutes};
use axum::Router;
use mealmatch_core::errors::{AppError, AppResult};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(NutritionRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the configured address and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {address}: {e}")))?;

    info!("HTTP server listening on http://{address}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
