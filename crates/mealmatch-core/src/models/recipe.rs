// ABOUTME: Recipe catalog document and normalized recipe output models
// ABOUTME: RecipeRecord wraps semi-structured documents; NormalizedRecipe is the response contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::recipe_fields;

/// A recipe document as stored in the catalog
///
/// Catalog documents are semi-structured: nutrition fields may be numbers or
/// numeric strings, list fields may be lists, plain strings, or legacy
/// `c("a","b")` literals. The record keeps the raw JSON object and leaves
/// interpretation to the feature extractor and the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeRecord {
    fields: Map<String, Value>,
}

impl RecipeRecord {
    /// Wrap an existing JSON object
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from an arbitrary JSON value; only objects are accepted
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Raw field lookup
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Recipe name if present and a string
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(recipe_fields::NAME).and_then(Value::as_str)
    }

    /// Borrow the underlying JSON object
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume into a JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Map<String, Value>> for RecipeRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Shape of a string-list field as found in a stored document
///
/// Resolved once during normalization into a plain `Vec<String>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListField {
    /// Native JSON array; non-string elements are dropped
    NativeList(Vec<String>),
    /// A single plain string
    SingleString(String),
    /// Legacy vector literal such as `c("a","b")`
    LegacyVectorLiteral(String),
}

impl ListField {
    /// Classify a raw field value; `None` when absent, null, or not list-like
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Array(items) => Some(Self::NativeList(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
            )),
            Value::String(s) if s.starts_with("c(") => Some(Self::LegacyVectorLiteral(s.clone())),
            Value::String(s) => Some(Self::SingleString(s.clone())),
            _ => None,
        }
    }
}

/// Macro summary attached to each normalized recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
}

/// Recipe in the uniform output shape returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecipe {
    /// Display name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Ingredient list
    #[serde(rename = "recipeingredientparts")]
    pub ingredient_parts: Vec<String>,
    /// ISO-8601 cook duration
    #[serde(rename = "cooktime")]
    pub cook_time: String,
    /// ISO-8601 prep duration
    #[serde(rename = "preptime")]
    pub prep_time: String,
    /// ISO-8601 total duration
    #[serde(rename = "totaltime")]
    pub total_time: String,
    /// Image URLs; never empty
    pub images: Vec<String>,
    /// Instruction steps
    #[serde(rename = "recipeinstructions")]
    pub instructions: Vec<String>,
    /// Macro summary
    pub nutrition: RecipeNutrition,
}
