// ABOUTME: Shared server resources handed to route handlers as axum state
// ABOUTME: Holds the configuration and the catalog-backed recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use crate::config::ServerConfig;
use crate::database::{RecipeCatalog, SqliteRecipeCatalog};
use crate::services::RecommendationService;
use mealmatch_core::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe catalog store
    pub catalog: Arc<dyn RecipeCatalog>,
    /// Recommendation operations
    pub recommendations: Arc<RecommendationService>,
}

impl ServerResources {
    /// Build resources around an existing catalog
    #[must_use]
    pub fn new(config: ServerConfig, catalog: Arc<dyn RecipeCatalog>) -> Self {
        let recommendations = RecommendationService::new(
            Arc::clone(&catalog),
            config.recommendation.clone(),
            config.engine.clone(),
        );

        Self {
            config: Arc::new(config),
            catalog,
            recommendations: Arc::new(recommendations),
        }
    }

    /// Connect to the configured `SQLite` catalog and build resources
    ///
    /// # Errors
    ///
    /// Returns a database error if the catalog cannot be opened
    pub async fn connect(config: ServerConfig) -> AppResult<Self> {
        let catalog = SqliteRecipeCatalog::connect(&config.database).await?;
        let recipe_count = catalog.count().await?;
        info!(
            catalog = %config.database.to_connection_string(),
            recipe_count,
            "Recipe catalog ready"
        );

        Ok(Self::new(config, Arc::new(catalog)))
    }
}
