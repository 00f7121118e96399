// ABOUTME: Core data models shared by the engine, catalog store, and routes
// ABOUTME: Re-exports recipe documents, normalized recipes, and person types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

/// Request-scoped person and body-metric classifications
pub mod person;
/// Catalog recipe documents and normalized output
pub mod recipe;

pub use person::{ActivityLevel, BmiCategory, Gender, Person, WeightGoal};
pub use recipe::{ListField, NormalizedRecipe, RecipeNutrition, RecipeRecord};
