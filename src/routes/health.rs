// ABOUTME: Service banner and health check route handlers
// ABOUTME: Provides the API index and liveness endpoint for monitoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the index and health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/api/health", get(Self::handle_health))
    }

    async fn handle_index() -> Json<Value> {
        Json(json!({
            "message": "Welcome to the MealMatch personalized food recommendation API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "/api/health": "Health check endpoint",
                "/api/nutrition": "POST endpoint for nutrition recommendations",
                "/api/custom-nutrition": "POST endpoint for custom nutrition recommendations"
            }
        }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "up",
            "message": "MealMatch API is running",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
