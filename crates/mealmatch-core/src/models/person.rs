// ABOUTME: Request-scoped person profile and body-metric classification types
// ABOUTME: Gender, activity level, weight goal, and BMI category with lenient label parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Gender {
    /// Parse a gender label; anything other than "male" is treated as female
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise
    Light,
    /// Moderate exercise
    Moderate,
    /// Heavy exercise
    Heavy,
    /// Very heavy exercise
    VeryHeavy,
}

impl ActivityLevel {
    /// Levels in scan order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Heavy,
        Self::VeryHeavy,
    ];

    /// Canonical label shown to users
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Little/no exercise",
            Self::Light => "Light exercise",
            Self::Moderate => "Moderate exercise",
            Self::Heavy => "Heavy exercise",
            Self::VeryHeavy => "Very heavy exercise",
        }
    }

    /// Resolve a free-form label by case-insensitive substring match
    ///
    /// Levels are scanned in [`Self::ALL`] order and the first canonical label
    /// contained in `label` wins, so "Very heavy exercise" resolves to
    /// [`Self::Heavy`]. Unmatched labels fall back to [`Self::Sedentary`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| label.contains(&level.label().to_lowercase()))
            .unwrap_or(Self::Sedentary)
    }
}

/// Weight goal driving the calorie multiplier and macro coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl WeightGoal {
    /// Parse a goal label; unrecognized labels maintain weight
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

/// BMI classification with half-open, lower-inclusive bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI < 18.5
    #[serde(rename = "Underweight")]
    Underweight,
    /// 18.5 <= BMI < 25
    #[serde(rename = "Normal weight")]
    Normal,
    /// 25 <= BMI < 30
    #[serde(rename = "Overweight")]
    Overweight,
    /// BMI >= 30
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body metrics for a single recommendation request; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Gender
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub weight_goal: WeightGoal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_first_match_wins() {
        assert_eq!(
            ActivityLevel::from_label("moderate EXERCISE (3-5 days)"),
            ActivityLevel::Moderate
        );
        assert_eq!(
            ActivityLevel::from_label("Very heavy exercise"),
            ActivityLevel::Heavy
        );
        assert_eq!(ActivityLevel::from_label("couch"), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
    }

    #[test]
    fn test_goal_and_gender_labels() {
        assert_eq!(WeightGoal::from_label("Lose"), WeightGoal::Lose);
        assert_eq!(WeightGoal::from_label("bulk"), WeightGoal::Maintain);
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label("Female"), Gender::Female);
    }
}
