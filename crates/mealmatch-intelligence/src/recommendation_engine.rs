// ABOUTME: Recommendation engine facade over a catalog snapshot
// ABOUTME: Extracts features, synthesizes or accepts a target, runs k-NN, and normalizes matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use crate::config::EngineConfig;
use crate::features::{extract_features, CatalogEntry, FeatureVector};
use crate::normalizer::normalize_recipe;
use crate::nutrition_calculator::{calculate_nutrition_targets, NutritionTargets};
use crate::similarity::nearest_neighbors;
use crate::target_profile::synthesize_target_profile;
use mealmatch_core::errors::AppResult;
use mealmatch_core::models::{NormalizedRecipe, Person, RecipeRecord};
use rand::Rng;
use tracing::debug;

/// Stateless recipe matcher
///
/// Holds configuration only. Each call fits its own transform over the
/// catalog slice it is given.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Body-metric targets for a person
    ///
    /// # Errors
    ///
    /// Returns an error if the person's measurements are invalid
    pub fn nutrition_targets(&self, person: &Person) -> AppResult<NutritionTargets> {
        calculate_nutrition_targets(person, &self.config)
    }

    /// Recipes closest to a synthesized profile for `calories`
    ///
    /// An empty catalog (after extraction) yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a non-positive calorie budget
    pub fn recommend_by_calorie_budget<R: Rng + ?Sized>(
        &self,
        catalog: &[RecipeRecord],
        calories: f64,
        count: usize,
        rng: &mut R,
    ) -> AppResult<Vec<NormalizedRecipe>> {
        let entries = extract_features(catalog);
        if entries.is_empty() {
            debug!(calories, "No usable recipes in catalog");
            return Ok(Vec::new());
        }

        let target = synthesize_target_profile(calories, &self.config.target_profile, rng)?;
        Ok(Self::match_entries(&entries, &target, count))
    }

    /// Recipes closest to a caller-supplied feature vector
    #[must_use]
    pub fn recommend_by_feature_vector(
        &self,
        catalog: &[RecipeRecord],
        target: &FeatureVector,
        count: usize,
    ) -> Vec<NormalizedRecipe> {
        let entries = extract_features(catalog);
        if entries.is_empty() {
            debug!("No usable recipes in catalog");
            return Vec::new();
        }

        Self::match_entries(&entries, target, count)
    }

    fn match_entries(
        entries: &[CatalogEntry<'_>],
        target: &FeatureVector,
        count: usize,
    ) -> Vec<NormalizedRecipe> {
        let matrix: Vec<FeatureVector> = entries.iter().map(|entry| entry.features).collect();
        let neighbors = nearest_neighbors(&matrix, target, count);

        debug!(
            requested = count,
            matched = neighbors.len(),
            closest = neighbors.first().map(|n| n.distance),
            "Nearest-neighbor search complete"
        );

        neighbors
            .iter()
            .filter_map(|neighbor| entries.get(neighbor.index))
            .map(|entry| normalize_recipe(entry.record))
            .collect()
    }
}
