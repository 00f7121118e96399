// ABOUTME: Recipe matching engine: feature extraction, target synthesis, k-NN search, normalization
// ABOUTME: Pure synchronous computation over catalog snapshots with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

#![deny(unsafe_code)]

//! # `MealMatch` Intelligence
//!
//! Everything in this crate is request-local: the standardization transform
//! and neighbor search are rebuilt from the catalog snapshot on every call and
//! discarded afterwards.
//!
//! Data flow for a calorie-budget request:
//!
//! ```text
//! body metrics -> meal budget -> target profile -> standardize + cosine k-NN -> normalize
//! ```

/// Engine configuration and validation
pub mod config;
/// Recipe document to feature vector coercion
pub mod features;
/// Recipe document to output contract normalization
pub mod normalizer;
/// BMI, BMR, TDEE, macro and meal budget arithmetic
pub mod nutrition_calculator;
/// Engine facade tying extraction, search and normalization together
pub mod recommendation_engine;
/// Standardization and cosine nearest-neighbor search
pub mod similarity;
/// Randomized target profile synthesis from a calorie budget
pub mod target_profile;

pub use config::{ConfigError, EngineConfig, Meal};
pub use features::{extract_features, CatalogEntry, FeatureVector};
pub use normalizer::{normalize_recipe, sanitize_image_url};
pub use nutrition_calculator::{calculate_nutrition_targets, MealBudgets, NutritionTargets};
pub use recommendation_engine::RecommendationEngine;
pub use similarity::{nearest_neighbors, Neighbor, StandardScaler};
pub use target_profile::synthesize_target_profile;
