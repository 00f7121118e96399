// ABOUTME: Recommendation service reading the catalog fresh per request and running the engine
// ABOUTME: Exposes calorie-budget, feature-vector, and full body-metrics meal plan operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use crate::config::RecommendationConfig;
use crate::database::RecipeCatalog;
use mealmatch_core::errors::AppResult;
use mealmatch_core::models::{NormalizedRecipe, Person};
use mealmatch_intelligence::{
    EngineConfig, FeatureVector, Meal, NutritionTargets, RecommendationEngine,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Recipes chosen for each meal of the day
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealRecommendations {
    /// Breakfast matches
    pub breakfast: Vec<NormalizedRecipe>,
    /// Lunch matches
    pub lunch: Vec<NormalizedRecipe>,
    /// Dinner matches
    pub dinner: Vec<NormalizedRecipe>,
}

impl MealRecommendations {
    fn slot_mut(&mut self, meal: Meal) -> &mut Vec<NormalizedRecipe> {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Dinner => &mut self.dinner,
        }
    }
}

/// Body-metric targets plus per-meal recipe matches
#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlan {
    /// BMI, calories, macros and meal budgets
    pub targets: NutritionTargets,
    /// Matched recipes per meal
    pub recipes: MealRecommendations,
}

/// Recipe recommendation operations over a catalog store
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn RecipeCatalog>,
    engine: RecommendationEngine,
    config: RecommendationConfig,
}

impl RecommendationService {
    /// Create a service over a catalog
    #[must_use]
    pub fn new(
        catalog: Arc<dyn RecipeCatalog>,
        config: RecommendationConfig,
        engine_config: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            engine: RecommendationEngine::new(engine_config),
            config,
        }
    }

    /// Active recommendation limits
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Number of documents currently in the catalog
    ///
    /// # Errors
    ///
    /// Returns a database error if the catalog cannot be read
    pub async fn catalog_size(&self) -> AppResult<u64> {
        self.catalog.count().await
    }

    /// Recipes matching a synthesized profile for one calorie budget
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive budget or a catalog read failure
    pub async fn recommend_by_calorie_budget(
        &self,
        target_calories: f64,
        count: usize,
    ) -> AppResult<Vec<NormalizedRecipe>> {
        let mut rng = self.request_rng();
        self.recommend_for_budget(target_calories, count, &mut rng)
            .await
    }

    /// Recipes matching a caller-supplied nutrition vector
    ///
    /// # Errors
    ///
    /// Returns a database error if the catalog cannot be read
    pub async fn recommend_by_feature_vector(
        &self,
        vector: &FeatureVector,
        count: usize,
        ingredient_filter: Option<&str>,
    ) -> AppResult<Vec<NormalizedRecipe>> {
        // TODO: apply ingredient_filter to the candidate set once matching semantics are agreed
        if let Some(filter) = ingredient_filter.filter(|f| !f.trim().is_empty()) {
            debug!(ingredient_filter = filter, "Ingredient filter received but not applied");
        }

        let count = self.config.clamp_count(count);
        let catalog = self.catalog.fetch_all().await?;
        let recipes = self.engine.recommend_by_feature_vector(&catalog, vector, count);

        info!(
            requested = count,
            returned = recipes.len(),
            "Feature-vector recommendations generated"
        );
        Ok(recipes)
    }

    /// BMI, macro targets and recipe matches for breakfast, lunch and dinner
    ///
    /// Each meal re-reads the catalog and fits its own transform. A meal whose
    /// budget is not positive keeps an empty recipe list.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid body measurements or a catalog read failure
    pub async fn nutrition_plan(&self, person: &Person) -> AppResult<NutritionPlan> {
        let targets = self.engine.nutrition_targets(person)?;
        info!(
            bmi = targets.bmi,
            category = %targets.category,
            calories = targets.calories,
            protein_g = targets.macros.protein_g,
            carbs_g = targets.macros.carbs_g,
            fat_g = targets.macros.fat_g,
            "Calculated nutrition targets"
        );

        let mut rng = self.request_rng();
        let mut recipes = MealRecommendations::default();
        for meal in Meal::ALL {
            let budget = targets.meal_budgets.budget_for(meal);
            if !budget.is_finite() || budget <= 0.0 {
                warn!(?meal, budget, "Meal budget is not positive; skipping recommendations");
                continue;
            }
            *recipes.slot_mut(meal) = self
                .recommend_for_budget(budget, self.config.meal_recipe_count, &mut rng)
                .await?;
        }

        Ok(NutritionPlan { targets, recipes })
    }

    async fn recommend_for_budget(
        &self,
        target_calories: f64,
        count: usize,
        rng: &mut ChaCha8Rng,
    ) -> AppResult<Vec<NormalizedRecipe>> {
        let count = self.config.clamp_count(count);
        let catalog = self.catalog.fetch_all().await?;
        let recipes = self
            .engine
            .recommend_by_calorie_budget(&catalog, target_calories, count, rng)?;

        info!(
            target_calories,
            requested = count,
            returned = recipes.len(),
            "Calorie-budget recommendations generated"
        );
        Ok(recipes)
    }

    fn request_rng(&self) -> ChaCha8Rng {
        self.config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}
