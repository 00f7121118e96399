// ABOUTME: In-memory recipe catalog backed by a lock-protected vector
// ABOUTME: Used by tests and embedders that supply recipe documents directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use super::RecipeCatalog;
use async_trait::async_trait;
use mealmatch_core::errors::AppResult;
use mealmatch_core::models::RecipeRecord;
use tokio::sync::RwLock;

/// Recipe catalog held in process memory
#[derive(Debug, Default)]
pub struct InMemoryRecipeCatalog {
    records: RwLock<Vec<RecipeRecord>>,
}

impl InMemoryRecipeCatalog {
    /// Create a catalog with initial documents
    #[must_use]
    pub fn new(records: Vec<RecipeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append a document
    pub async fn insert(&self, record: RecipeRecord) {
        self.records.write().await.push(record);
    }

    /// Remove every document
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryRecipeCatalog {
    async fn fetch_all(&self) -> AppResult<Vec<RecipeRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}
