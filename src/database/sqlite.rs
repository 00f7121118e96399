// ABOUTME: SQLite recipe catalog storing each recipe as a JSON document row
// ABOUTME: Handles connection, table creation, bulk inserts, and full-catalog reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use super::RecipeCatalog;
use crate::config::DatabaseUrl;
use async_trait::async_trait;
use chrono::Utc;
use mealmatch_core::errors::{AppError, AppResult};
use mealmatch_core::models::RecipeRecord;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

/// Recipe catalog persisted in `SQLite`
///
/// Documents are kept as JSON text so heterogeneous field shapes survive
/// storage unchanged.
#[derive(Clone)]
pub struct SqliteRecipeCatalog {
    pool: SqlitePool,
}

impl SqliteRecipeCatalog {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the catalog database and ensure the schema exists
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection or migration fails
    pub async fn connect(url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match url {
            // One long-lived connection: each new in-memory connection is a fresh database
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&url.to_connection_string())
                .await,
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create catalog directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                // Create the database file if it doesn't exist
                SqlitePool::connect(&format!("{}?mode=rwc", url.to_connection_string())).await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to connect to recipe catalog: {e}")))?;

        let catalog = Self { pool };
        catalog.migrate().await?;
        Ok(catalog)
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the recipes table
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        Ok(())
    }

    /// Store one recipe document, returning its row id
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn insert(&self, record: &RecipeRecord) -> AppResult<i64> {
        let document = serde_json::to_string(record)?;

        let result = sqlx::query(
            r"
            INSERT INTO recipes (name, document, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(record.name())
        .bind(document)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Store many documents in a single transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is committed in that case
    pub async fn insert_many(&self, records: &[RecipeRecord]) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let created_at = Utc::now().to_rfc3339();
        for record in records {
            let document = serde_json::to_string(record)?;
            sqlx::query("INSERT INTO recipes (name, document, created_at) VALUES ($1, $2, $3)")
                .bind(record.name())
                .bind(document)
                .bind(&created_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to insert recipe: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recipes: {e}")))?;

        Ok(records.len() as u64)
    }

    /// Delete every stored recipe
    ///
    /// # Errors
    ///
    /// Returns a database error if the delete fails
    pub async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM recipes")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear recipes: {e}")))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RecipeCatalog for SqliteRecipeCatalog {
    async fn fetch_all(&self) -> AppResult<Vec<RecipeRecord>> {
        let rows = sqlx::query("SELECT id, document FROM recipes ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to read recipe catalog: {e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.get("id");
            let document: String = row.get("document");

            match serde_json::from_str(&document).map(RecipeRecord::from_value) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => warn!(recipe_id = id, "Skipping stored recipe that is not a JSON object"),
                Err(e) => warn!(recipe_id = id, error = %e, "Skipping unreadable stored recipe"),
            }
        }

        debug!(count = records.len(), "Loaded recipe catalog");
        Ok(records)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
