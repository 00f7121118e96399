// ABOUTME: Engine configuration for body-metric formulas, meal splits, and target synthesis
// ABOUTME: Defaults reproduce the production constants; validate() guards runtime overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Recommendation Engine Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use mealmatch_core::models::{ActivityLevel, WeightGoal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Lower bound not strictly below upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Proportions don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Per-goal calorie multiplier and macro coefficients
    pub goals: GoalsConfig,
    /// Daily calorie split across meals
    pub meal_split: MealSplitConfig,
    /// Target profile synthesis bounds and projection multipliers
    pub target_profile: TargetProfileConfig,
}

impl EngineConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goals.validate()?;
        self.meal_split.validate()?;
        self.target_profile.validate()
    }
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little/no exercise: 1.2
    pub sedentary: f64,
    /// Light exercise: 1.375
    pub light: f64,
    /// Moderate exercise: 1.55
    pub moderate: f64,
    /// Heavy exercise: 1.725
    pub heavy: f64,
    /// Very heavy exercise: 1.9
    pub very_heavy: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            heavy: 1.725,
            very_heavy: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Heavy => self.heavy,
            ActivityLevel::VeryHeavy => self.very_heavy,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for level in ActivityLevel::ALL {
            let factor = self.factor_for(level);
            if !(1.0..=2.5).contains(&factor) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "activity factor for '{}' must be between 1.0 and 2.5, got {factor}",
                    level.label()
                )));
            }
        }
        Ok(())
    }
}

/// Calorie multiplier and per-kg macro coefficients for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Multiplier applied to TDEE
    pub calorie_multiplier: f64,
    /// Protein grams per kg body weight
    pub protein_g_per_kg: f64,
    /// Fat grams per kg body weight
    pub fat_g_per_kg: f64,
}

/// Goal profiles for lose / maintain / gain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Weight loss
    pub lose: GoalProfile,
    /// Maintenance
    pub maintain: GoalProfile,
    /// Weight gain
    pub gain: GoalProfile,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            lose: GoalProfile {
                calorie_multiplier: 0.8,
                protein_g_per_kg: 1.6,
                fat_g_per_kg: 0.5,
            },
            maintain: GoalProfile {
                calorie_multiplier: 1.0,
                protein_g_per_kg: 1.2,
                fat_g_per_kg: 0.8,
            },
            gain: GoalProfile {
                calorie_multiplier: 1.2,
                protein_g_per_kg: 2.2,
                fat_g_per_kg: 1.0,
            },
        }
    }
}

impl GoalsConfig {
    /// Profile for a weight goal
    #[must_use]
    pub const fn profile_for(&self, goal: WeightGoal) -> &GoalProfile {
        match goal {
            WeightGoal::Lose => &self.lose,
            WeightGoal::Maintain => &self.maintain,
            WeightGoal::Gain => &self.gain,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let profiles = [
            ("lose", &self.lose),
            ("maintain", &self.maintain),
            ("gain", &self.gain),
        ];

        for (name, profile) in profiles {
            if profile.calorie_multiplier <= 0.0
                || profile.protein_g_per_kg <= 0.0
                || profile.fat_g_per_kg <= 0.0
            {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} goal coefficients must all be positive"
                )));
            }
        }
        Ok(())
    }
}

/// Meal of the day receiving a share of total calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

impl Meal {
    /// Meals in serving order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

/// Daily calorie split across meals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share of daily calories (0.30)
    pub breakfast: f64,
    /// Lunch share of daily calories (0.40)
    pub lunch: f64,
    /// Dinner share of daily calories (0.30)
    pub dinner: f64,
    /// Kcal withheld from every meal budget to leave room for snacks (100)
    pub snack_offset_kcal: f64,
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.30,
            lunch: 0.40,
            dinner: 0.30,
            snack_offset_kcal: 100.0,
        }
    }
}

impl MealSplitConfig {
    /// Share of daily calories for a meal
    #[must_use]
    pub const fn share_for(&self, meal: Meal) -> f64 {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for meal in Meal::ALL {
            let share = self.share_for(meal);
            if !(0.0..=1.0).contains(&share) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{meal:?} share must be between 0.0 and 1.0, got {share}"
                )));
            }
        }

        let total = self.breakfast + self.lunch + self.dinner;
        if (total - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(format!(
                "meal shares must sum to 1.0, got {total}"
            )));
        }

        if self.snack_offset_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "snack offset must not be negative".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Share-of-calories bounds for one macro
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroShareRange {
    /// Lower share of the calorie budget
    pub min_share: f64,
    /// Upper share of the calorie budget
    pub max_share: f64,
    /// Energy density (kcal per gram)
    pub kcal_per_gram: f64,
}

impl MacroShareRange {
    /// Gram bounds for a calorie budget
    #[must_use]
    pub fn gram_bounds(&self, calories: f64) -> (f64, f64) {
        (
            calories * self.min_share / self.kcal_per_gram,
            calories * self.max_share / self.kcal_per_gram,
        )
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.min_share) || self.min_share >= self.max_share {
            return Err(ConfigError::InvalidRange(format!(
                "{name} share range must satisfy 0 <= min < max, got {}..{}",
                self.min_share, self.max_share
            )));
        }
        if self.kcal_per_gram <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{name} energy density must be positive"
            )));
        }
        Ok(())
    }
}

/// Target profile synthesis parameters
///
/// The secondary nutrients are fixed multiples of a primary quantity; they are
/// a heuristic projection onto the 9-dimensional feature space, not a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfileConfig {
    /// Protein: 25-35% of calories at 4 kcal/g
    pub protein: MacroShareRange,
    /// Carbohydrates: 45-65% of calories at 4 kcal/g
    pub carbs: MacroShareRange,
    /// Fat: 20-35% of calories at 9 kcal/g
    pub fat: MacroShareRange,
    /// Saturated fat as a multiple of fat (0.3)
    pub saturated_fat_per_fat: f64,
    /// Cholesterol as a multiple of protein (3.0)
    pub cholesterol_per_protein: f64,
    /// Sodium as a multiple of calories (0.2)
    pub sodium_per_calorie: f64,
    /// Fiber as a multiple of carbohydrates (0.15)
    pub fiber_per_carb: f64,
    /// Sugar as a multiple of carbohydrates (0.2)
    pub sugar_per_carb: f64,
}

impl Default for TargetProfileConfig {
    fn default() -> Self {
        Self {
            protein: MacroShareRange {
                min_share: 0.25,
                max_share: 0.35,
                kcal_per_gram: 4.0,
            },
            carbs: MacroShareRange {
                min_share: 0.45,
                max_share: 0.65,
                kcal_per_gram: 4.0,
            },
            fat: MacroShareRange {
                min_share: 0.20,
                max_share: 0.35,
                kcal_per_gram: 9.0,
            },
            saturated_fat_per_fat: 0.3,
            cholesterol_per_protein: 3.0,
            sodium_per_calorie: 0.2,
            fiber_per_carb: 0.15,
            sugar_per_carb: 0.2,
        }
    }
}

impl TargetProfileConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.protein.validate("protein")?;
        self.carbs.validate("carbs")?;
        self.fat.validate("fat")?;

        let multipliers = [
            self.saturated_fat_per_fat,
            self.cholesterol_per_protein,
            self.sodium_per_calorie,
            self.fiber_per_carb,
            self.sugar_per_carb,
        ];
        if multipliers.iter().any(|m| *m < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "projection multipliers must not be negative".to_owned(),
            ));
        }
        Ok(())
    }
}
