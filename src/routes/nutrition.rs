// ABOUTME: Nutrition recommendation route handlers
// ABOUTME: Body-metrics meal plans and ad-hoc nutrition-vector recipe matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Nutrition routes
//!
//! Request bodies accept numbers or numeric strings wherever a number is
//! expected, since form-driven clients commonly send text.

use crate::resources::ServerResources;
use crate::services::{MealRecommendations, NutritionPlan};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use mealmatch_core::constants::FEATURE_DIMENSIONS;
use mealmatch_core::errors::{AppError, AppResult};
use mealmatch_core::models::{
    ActivityLevel, BmiCategory, Gender, NormalizedRecipe, Person, WeightGoal,
};
use mealmatch_intelligence::FeatureVector;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const MAX_AGE_YEARS: f64 = 150.0;

/// A number sent either as JSON number or numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// JSON number
    Number(f64),
    /// Numeric text
    Text(String),
}

impl NumericInput {
    /// Parse into a finite float
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` naming `field` when the value is not a finite number
    pub fn to_f64(&self, field: &str) -> AppResult<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                AppError::invalid_input(format!("Invalid value for {field}: {s:?} is not a number"))
            })?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(AppError::invalid_input(format!(
                "Invalid value for {field}: must be a finite number"
            )))
        }
    }
}

impl TryFrom<&Value> for NumericInput {
    type Error = AppError;

    fn try_from(value: &Value) -> AppResult<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| AppError::invalid_input(format!("Invalid nutrition value: {n}"))),
            Value::String(s) => Ok(Self::Text(s.clone())),
            other => Err(AppError::invalid_input(format!(
                "Invalid nutrition value: {other}"
            ))),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Body of `POST /api/nutrition`; every field has a default
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRequest {
    /// Age in years (default 30)
    pub age: Option<NumericInput>,
    /// Height in cm (default 170)
    pub height: Option<NumericInput>,
    /// Weight in kg (default 70)
    pub weight: Option<NumericInput>,
    /// Gender label (default "Male")
    pub gender: Option<String>,
    /// Activity label (default "Little/no exercise")
    pub activity_level: Option<String>,
    /// Goal label (default "Maintain")
    pub weight_goal: Option<String>,
}

impl NutritionRequest {
    /// Resolve defaults and parse labels into a person profile
    ///
    /// Age and height are truncated to whole numbers; weight keeps its fraction.
    ///
    /// # Errors
    ///
    /// Returns a client error for non-numeric or out-of-range measurements
    pub fn into_person(self) -> AppResult<Person> {
        let age = number_or(self.age.as_ref(), "age", 30.0)?;
        if !(0.0..=MAX_AGE_YEARS).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between 0 and {MAX_AGE_YEARS} years"
            )));
        }

        Ok(Person {
            age: age as u32,
            height_cm: number_or(self.height.as_ref(), "height", 170.0)?.trunc(),
            weight_kg: number_or(self.weight.as_ref(), "weight", 70.0)?,
            gender: Gender::from_label(self.gender.as_deref().unwrap_or("Male")),
            activity_level: ActivityLevel::from_label(
                self.activity_level
                    .as_deref()
                    .unwrap_or(ActivityLevel::Sedentary.label()),
            ),
            weight_goal: WeightGoal::from_label(self.weight_goal.as_deref().unwrap_or("Maintain")),
        })
    }
}

/// Response of `POST /api/nutrition`
#[derive(Debug, Clone, Serialize)]
pub struct NutritionResponse {
    /// BMI rendered with up to 2 decimals
    pub bmi: String,
    /// BMI category label
    pub category: BmiCategory,
    /// Daily calories (kcal)
    pub calories: i64,
    /// Daily protein (g)
    pub protein: i64,
    /// Daily carbohydrates (g)
    pub carbs: i64,
    /// Daily fat (g)
    pub fats: i64,
    /// Matched recipes per meal
    pub recipes: MealRecommendations,
}

impl From<NutritionPlan> for NutritionResponse {
    fn from(plan: NutritionPlan) -> Self {
        let targets = plan.targets;
        Self {
            bmi: format_bmi(targets.bmi),
            category: targets.category,
            calories: targets.calories as i64,
            protein: targets.macros.protein_g as i64,
            carbs: targets.macros.carbs_g as i64,
            fats: targets.macros.fat_g as i64,
            recipes: plan.recipes,
        }
    }
}

/// Body of `POST /api/custom-nutrition`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomNutritionRequest {
    /// Nine nutrition values in catalog feature order, checked element by element
    pub nutrition_values_list: Option<Vec<Value>>,
    /// Result count (server default when absent)
    pub nb_recommendations: Option<NumericInput>,
    /// Free-text ingredient filter
    pub ingredient_txt: Option<String>,
}

impl CustomNutritionRequest {
    /// Validate and convert the nutrition values
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` unless exactly nine finite numbers are supplied
    pub fn feature_vector(&self) -> AppResult<FeatureVector> {
        let values = self
            .nutrition_values_list
            .as_deref()
            .filter(|values| values.len() == FEATURE_DIMENSIONS)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Invalid nutrition values provided. Need exactly {FEATURE_DIMENSIONS} values."
                ))
            })?
            .iter()
            .map(|value| NumericInput::try_from(value)?.to_f64("nutrition_values_list"))
            .collect::<AppResult<Vec<f64>>>()?;

        FeatureVector::try_from(values.as_slice())
    }

    /// Requested result count, or `default` when absent
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a count below 1 or with a fractional part
    pub fn count_or(&self, default: usize) -> AppResult<usize> {
        let Some(raw) = &self.nb_recommendations else {
            return Ok(default);
        };

        let count = raw.to_f64("nb_recommendations")?;
        if count < 1.0 || count.fract() != 0.0 {
            return Err(AppError::invalid_input(
                "nb_recommendations must be a positive whole number",
            ));
        }
        Ok(count as usize)
    }
}

/// Nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition", post(Self::handle_nutrition))
            .route("/api/custom-nutrition", post(Self::handle_custom_nutrition))
            .with_state(resources)
    }

    /// Handle body-metrics meal plan
    async fn handle_nutrition(
        State(resources): State<Arc<ServerResources>>,
        request: Result<Json<NutritionRequest>, JsonRejection>,
    ) -> Result<Json<NutritionResponse>, AppError> {
        let Json(request) = request.map_err(invalid_body)?;
        let person = request.into_person()?;
        info!(
            age = person.age,
            height_cm = person.height_cm,
            weight_kg = person.weight_kg,
            gender = ?person.gender,
            activity = person.activity_level.label(),
            goal = ?person.weight_goal,
            "Received nutrition request"
        );

        let plan = resources.recommendations.nutrition_plan(&person).await?;
        Ok(Json(NutritionResponse::from(plan)))
    }

    /// Handle ad-hoc nutrition vector matching
    async fn handle_custom_nutrition(
        State(resources): State<Arc<ServerResources>>,
        request: Result<Json<CustomNutritionRequest>, JsonRejection>,
    ) -> Result<Json<Vec<NormalizedRecipe>>, AppError> {
        let Json(request) = request.map_err(invalid_body)?;
        let vector = request.feature_vector()?;
        let service = &resources.recommendations;
        let count = request.count_or(service.config().custom_recipe_count)?;

        if service.catalog_size().await? == 0 {
            return Err(AppError::not_found("Recipes in the catalog"));
        }

        let recipes = service
            .recommend_by_feature_vector(&vector, count, request.ingredient_txt.as_deref())
            .await?;
        if recipes.is_empty() {
            return Err(AppError::not_found(
                "Recommendations for the given nutritional values",
            ));
        }

        Ok(Json(recipes))
    }
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
}

fn number_or(value: Option<&NumericInput>, field: &str, default: f64) -> AppResult<f64> {
    value.map_or(Ok(default), |v| v.to_f64(field))
}

// Whole numbers keep one decimal place: 25.0, not 25
fn format_bmi(bmi: f64) -> String {
    if bmi.fract() == 0.0 {
        format!("{bmi:.1}")
    } else {
        format!("{bmi}")
    }
}
