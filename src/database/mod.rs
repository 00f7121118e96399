// ABOUTME: Recipe catalog store abstraction and its SQLite and in-memory implementations
// ABOUTME: The engine reads the full catalog through RecipeCatalog on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! # Recipe Catalog Store
//!
//! The catalog is read-only from the recommendation path. Writes happen only
//! through the seeding tool and tests.

/// In-memory catalog for tests and embedding
pub mod memory;
/// `SQLite`-backed catalog
pub mod sqlite;

pub use memory::InMemoryRecipeCatalog;
pub use sqlite::SqliteRecipeCatalog;

use async_trait::async_trait;
use mealmatch_core::errors::AppResult;
use mealmatch_core::models::RecipeRecord;

/// Read access to the recipe catalog
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Every recipe document, in stable insertion order
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be read
    async fn fetch_all(&self) -> AppResult<Vec<RecipeRecord>>;

    /// Number of stored documents
    ///
    /// # Errors
    ///
    /// Returns a database error if the store cannot be read
    async fn count(&self) -> AppResult<u64>;
}
