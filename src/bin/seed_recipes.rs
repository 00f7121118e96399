// ABOUTME: Recipe catalog seeding utility for the recommendation server
// ABOUTME: Loads recipe documents from a JSON array file into the SQLite catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Recipe catalog seeder.
//!
//! Reads a JSON array of recipe objects and stores each object as one
//! catalog row. Non-object entries are skipped and counted.
//!
//! Usage:
//! ```bash
//! # Seed from a file (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes -- --file data/recipes.json
//!
//! # Override database URL and replace existing recipes
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/recipes.db --file recipes.json --reset
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use mealmatch_core::models::RecipeRecord;
use mealmatch_server::config::DatabaseUrl;
use mealmatch_server::database::{RecipeCatalog, SqliteRecipeCatalog};
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "MealMatch Recipe Catalog Seeder",
    long_about = "Load recipe documents from a JSON array file into the recipe catalog"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// JSON file containing an array of recipe objects
    #[arg(long, short = 'f')]
    file: PathBuf,

    /// Delete existing recipes before loading
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== MealMatch Recipe Catalog Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/recipes.db".into());
    let url = DatabaseUrl::parse_url(&database_url)?;
    if url.is_memory() {
        anyhow::bail!("Seeding an in-memory catalog has no effect; pass a file database URL");
    }

    info!("Reading recipes from {}", args.file.display());
    let raw = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let (records, skipped) = parse_recipe_array(&raw)?;
    if skipped > 0 {
        warn!("Skipped {skipped} entries that are not JSON objects");
    }

    info!("Connecting to catalog: {}", url.to_connection_string());
    let catalog = SqliteRecipeCatalog::connect(&url).await?;

    if args.reset {
        let removed = catalog.clear().await?;
        info!("Removed {removed} existing recipes");
    }

    let inserted = catalog.insert_many(&records).await?;
    let total = catalog.count().await?;

    info!("");
    info!("=== Seeding Complete ===");
    info!("Inserted {inserted} recipes ({total} in catalog)");

    Ok(())
}

/// Split a JSON array into recipe records and a count of skipped entries
fn parse_recipe_array(raw: &str) -> Result<(Vec<RecipeRecord>, usize)> {
    let Value::Array(items) = serde_json::from_str::<Value>(raw)? else {
        anyhow::bail!("Recipe file must contain a JSON array of objects");
    };

    let total = items.len();
    let records: Vec<RecipeRecord> = items
        .into_iter()
        .filter_map(RecipeRecord::from_value)
        .collect();
    let skipped = total - records.len();

    Ok((records, skipped))
}
