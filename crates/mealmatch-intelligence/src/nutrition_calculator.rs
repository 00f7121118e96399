// ABOUTME: Body-metric arithmetic producing calorie budgets and macro targets
// ABOUTME: BMI, Mifflin-St Jeor BMR, TDEE, goal-adjusted calories, macros, and per-meal budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! All rounding is half away from zero.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, EngineConfig, GoalsConfig, Meal, MealSplitConfig,
};
use mealmatch_core::errors::{AppError, AppResult};
use mealmatch_core::models::{ActivityLevel, BmiCategory, Gender, Person, WeightGoal};
use serde::{Deserialize, Serialize};

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Calorie budget handed to the target synthesizer for each meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealBudgets {
    /// Breakfast budget (kcal)
    pub breakfast: f64,
    /// Lunch budget (kcal)
    pub lunch: f64,
    /// Dinner budget (kcal)
    pub dinner: f64,
}

impl MealBudgets {
    /// Budget for a meal
    #[must_use]
    pub const fn budget_for(&self, meal: Meal) -> f64 {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }
}

/// Complete body-metric calculation result for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Body Mass Index, 2 decimals
    pub bmi: f64,
    /// BMI classification
    pub category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calories, whole kcal
    pub calories: f64,
    /// Daily macro targets
    pub macros: MacroTargets,
    /// Per-meal calorie budgets after the snack offset
    pub meal_budgets: MealBudgets,
}

/// Calculate Body Mass Index rounded to 2 decimals
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// # Errors
///
/// Returns an error if weight or height is not a positive finite number
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    validate_body_measurements(weight_kg, height_cm)?;

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Goal-adjusted daily calories, rounded to whole kcal
#[must_use]
pub fn calculate_daily_calories(tdee: f64, goal: WeightGoal, config: &GoalsConfig) -> f64 {
    (tdee * config.profile_for(goal).calorie_multiplier).round()
}

/// Macro split for a calorie target
///
/// Protein and fat are fixed grams per kg for the goal; carbohydrates take the
/// remaining calories at 4 kcal/g.
#[must_use]
pub fn calculate_macros(
    calories: f64,
    weight_kg: f64,
    goal: WeightGoal,
    config: &GoalsConfig,
) -> MacroTargets {
    let profile = config.profile_for(goal);
    let protein_g = (weight_kg * profile.protein_g_per_kg).round();
    let fat_g = (weight_kg * profile.fat_g_per_kg).round();
    let carbs_g = ((calories - fat_g.mul_add(9.0, protein_g * 4.0)) / 4.0).round();

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Split daily calories into meal budgets: `round(calories * share) - offset`
#[must_use]
pub fn calculate_meal_budgets(calories: f64, config: &MealSplitConfig) -> MealBudgets {
    let budget = |meal| (calories * config.share_for(meal)).round() - config.snack_offset_kcal;

    MealBudgets {
        breakfast: budget(Meal::Breakfast),
        lunch: budget(Meal::Lunch),
        dinner: budget(Meal::Dinner),
    }
}

/// Run the full body-metric pipeline for one person
///
/// # Errors
///
/// Returns an error if weight or height is not a positive finite number
pub fn calculate_nutrition_targets(
    person: &Person,
    config: &EngineConfig,
) -> AppResult<NutritionTargets> {
    let bmi = calculate_bmi(person.weight_kg, person.height_cm)?;
    let bmr = calculate_mifflin_st_jeor(
        person.weight_kg,
        person.height_cm,
        person.age,
        person.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, person.activity_level, &config.activity_factors);
    let calories = calculate_daily_calories(tdee, person.weight_goal, &config.goals);
    let macros = calculate_macros(calories, person.weight_kg, person.weight_goal, &config.goals);

    Ok(NutritionTargets {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        bmr,
        tdee,
        calories,
        macros,
        meal_budgets: calculate_meal_budgets(calories, &config.meal_split),
    })
}

fn validate_body_measurements(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be a positive number"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be a positive number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(activity: &str, goal: &str) -> Person {
        Person {
            age: 30,
            height_cm: 175.0,
            weight_kg: 70.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::from_label(activity),
            weight_goal: WeightGoal::from_label(goal),
        }
    }

    #[test]
    fn test_bmi_boundary_scenario() {
        let bmi = calculate_bmi(74.5, 170.0).unwrap();
        assert!((bmi - 25.78).abs() < 1e-9);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Overweight);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(calculate_bmi(70.0, 0.0).is_err());
        assert!(calculate_bmi(-1.0, 170.0).is_err());
    }

    #[test]
    fn test_bmr_female_constant() {
        let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &BmrConfig::default());
        // 600 + 1031.25 - 125 - 161
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_pipeline() {
        let targets =
            calculate_nutrition_targets(&person("Moderate exercise", "Maintain"), &EngineConfig::default())
                .unwrap();

        // 700 + 1093.75 - 150 + 5
        assert!((targets.bmr - 1648.75).abs() < 1e-9);
        assert!((targets.tdee - 2555.5625).abs() < 1e-9);
        assert!((targets.calories - 2556.0).abs() < f64::EPSILON);
        assert!((targets.macros.protein_g - 84.0).abs() < f64::EPSILON);
        assert!((targets.macros.fat_g - 56.0).abs() < f64::EPSILON);
        assert!((targets.macros.carbs_g - 429.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_carbs_take_remaining_calories() {
        let macros = calculate_macros(2594.0, 70.0, WeightGoal::Maintain, &GoalsConfig::default());

        assert!((macros.protein_g - 84.0).abs() < f64::EPSILON);
        assert!((macros.fat_g - 56.0).abs() < f64::EPSILON);
        // (2594 - 840) / 4 = 438.5
        assert!((macros.carbs_g - 439.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_multipliers_and_coefficients() {
        let config = EngineConfig::default();
        let lose = calculate_nutrition_targets(&person("Little/no exercise", "Lose"), &config).unwrap();
        let gain = calculate_nutrition_targets(&person("Little/no exercise", "Gain"), &config).unwrap();

        // BMR 1648.75 * 1.2 = 1978.5
        assert!((lose.calories - (1978.5_f64 * 0.8).round()).abs() < f64::EPSILON);
        assert!((gain.calories - (1978.5_f64 * 1.2).round()).abs() < f64::EPSILON);
        assert!((lose.macros.protein_g - 112.0).abs() < f64::EPSILON);
        assert!((lose.macros.fat_g - 35.0).abs() < f64::EPSILON);
        assert!((gain.macros.protein_g - 154.0).abs() < f64::EPSILON);
        assert!((gain.macros.fat_g - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_budgets_subtract_snack_offset() {
        let budgets = calculate_meal_budgets(2594.0, &MealSplitConfig::default());

        assert!((budgets.breakfast - 678.0).abs() < f64::EPSILON);
        assert!((budgets.lunch - 938.0).abs() < f64::EPSILON);
        assert!((budgets.dinner - 678.0).abs() < f64::EPSILON);
        assert!((budgets.budget_for(Meal::Lunch) - budgets.lunch).abs() < f64::EPSILON);
    }
}
