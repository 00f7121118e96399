// ABOUTME: Synthesizes the desired recipe feature vector for a calorie budget
// ABOUTME: Protein, carb and fat targets are drawn uniformly from calorie-share ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use crate::config::{MacroShareRange, TargetProfileConfig};
use crate::features::FeatureVector;
use mealmatch_core::errors::{AppError, AppResult};
use rand::Rng;

/// Build a target profile for one meal budget
///
/// Output layout matches [`FeatureVector`]:
/// `[calories, fat, fat*0.3, protein*3, calories*0.2, carbs, carbs*0.15, carbs*0.2, protein]`
/// with the multipliers taken from `config`. Every call draws fresh samples from `rng`.
///
/// # Errors
///
/// Returns `INVALID_INPUT` when `calories` is zero, negative or not finite
pub fn synthesize_target_profile<R: Rng + ?Sized>(
    calories: f64,
    config: &TargetProfileConfig,
    rng: &mut R,
) -> AppResult<FeatureVector> {
    if !calories.is_finite() || calories <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Calorie budget must be a positive number, got {calories}"
        )));
    }

    let protein = sample_grams(&config.protein, calories, rng);
    let carbs = sample_grams(&config.carbs, calories, rng);
    let fat = sample_grams(&config.fat, calories, rng);

    Ok(FeatureVector::new([
        calories,
        fat,
        fat * config.saturated_fat_per_fat,
        protein * config.cholesterol_per_protein,
        calories * config.sodium_per_calorie,
        carbs,
        carbs * config.fiber_per_carb,
        carbs * config.sugar_per_carb,
        protein,
    ]))
}

// Uniform draw over [low, high]; never panics on a degenerate range
fn sample_grams<R: Rng + ?Sized>(range: &MacroShareRange, calories: f64, rng: &mut R) -> f64 {
    let (low, high) = range.gram_bounds(calories);
    rng.gen::<f64>().mul_add(high - low, low)
}
