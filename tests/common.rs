// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, recipe catalog fixtures, and seeded server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealmatch_server`

use mealmatch_core::models::RecipeRecord;
use mealmatch_server::config::{DatabaseUrl, RecommendationConfig, ServerConfig};
use mealmatch_server::database::{InMemoryRecipeCatalog, RecipeCatalog};
use mealmatch_server::resources::ServerResources;
use serde_json::{json, Value};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Seed used for every test that draws a target profile
pub const TEST_SEED: u64 = 42;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a recipe document with the nine nutrition fields in feature order
pub fn recipe_json(name: &str, nutrition: [f64; 9]) -> Value {
    let [calories, fat, saturated, cholesterol, sodium, carbs, fiber, sugar, protein] = nutrition;
    json!({
        "name": name,
        "calories": calories,
        "fatcontent": fat,
        "saturatedfatcontent": saturated,
        "cholesterolcontent": cholesterol,
        "sodiumcontent": sodium,
        "carbohydratecontent": carbs,
        "fibercontent": fiber,
        "sugarcontent": sugar,
        "proteincontent": protein,
    })
}

/// Nutrition vectors of the well-formed fixture recipes, in catalog order
pub const FIXTURE_NUTRITION: [(&str, [f64; 9]); 6] = [
    ("Oatmeal Bowl", [350.0, 8.0, 2.0, 10.0, 150.0, 60.0, 8.0, 12.0, 12.0]),
    ("Grilled Chicken Salad", [450.0, 18.0, 4.0, 90.0, 600.0, 20.0, 6.0, 8.0, 45.0]),
    ("Beef Lasagna", [780.0, 38.0, 16.0, 120.0, 1100.0, 65.0, 5.0, 10.0, 42.0]),
    ("Fruit Smoothie", [250.0, 3.0, 1.0, 5.0, 60.0, 55.0, 6.0, 40.0, 6.0]),
    ("Salmon with Rice", [620.0, 22.0, 5.0, 80.0, 450.0, 58.0, 3.0, 2.0, 40.0]),
    ("Chocolate Cake", [520.0, 28.0, 14.0, 70.0, 300.0, 62.0, 3.0, 45.0, 6.0]),
];

/// Well-formed catalog documents in every supported list encoding
pub fn sample_recipe_documents() -> Vec<Value> {
    let mut documents: Vec<Value> = FIXTURE_NUTRITION
        .iter()
        .map(|(name, nutrition)| recipe_json(name, *nutrition))
        .collect();

    documents[0]["recipeingredientparts"] = json!(["oats", "milk", "honey"]);
    documents[0]["images"] = json!(["https://img.example.com/oatmeal.jpg"]);
    documents[0]["recipeinstructions"] = json!(["Boil milk", "Stir in oats"]);
    documents[0]["cooktime"] = json!("PT10M");

    documents[1]["recipeingredientparts"] = json!(r#"c("chicken", "lettuce", "olive oil")"#);
    documents[1]["images"] =
        json!(r#"c("https://img.example.com/salad.png", "https://img.example.com/salad2.png")"#);
    documents[1]["recipeinstructions"] = json!(r#"c("Grill chicken", "Toss salad")"#);

    documents[2]["recipeingredientparts"] = json!("beef");
    documents[2]["images"] = json!("\"https://img.example.com/lasagna.jpeg\"");
    // Numeric strings coerce like numbers
    documents[2]["calories"] = json!("780");

    documents[3]["images"] = json!("c()");

    documents
}

/// Fixture documents plus one with an unparsable nutrition field
pub fn sample_recipe_documents_with_malformed() -> Vec<Value> {
    let mut documents = sample_recipe_documents();
    let mut stew = recipe_json("Mystery Stew", [400.0, 10.0, 3.0, 40.0, 500.0, 30.0, 4.0, 5.0, 25.0]);
    stew["calories"] = json!("lots");
    documents.push(stew);
    documents
}

/// Convert documents into catalog records
pub fn records_from(documents: Vec<Value>) -> Vec<RecipeRecord> {
    documents
        .into_iter()
        .map(|doc| RecipeRecord::from_value(doc).expect("fixture documents are objects"))
        .collect()
}

/// Fixture catalog records
pub fn sample_recipes() -> Vec<RecipeRecord> {
    records_from(sample_recipe_documents())
}

/// Server configuration with a fixed recommendation seed and in-memory catalog URL
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseUrl::Memory,
        recommendation: RecommendationConfig {
            seed: Some(TEST_SEED),
            ..RecommendationConfig::default()
        },
        ..ServerConfig::default()
    }
}

/// Server resources backed by an in-memory catalog holding `records`
pub fn create_test_resources(records: Vec<RecipeRecord>) -> Arc<ServerResources> {
    init_test_logging();
    let catalog: Arc<dyn RecipeCatalog> = Arc::new(InMemoryRecipeCatalog::new(records));
    Arc::new(ServerResources::new(test_server_config(), catalog))
}
