// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Recommendation orchestration over the catalog store and matching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

/// Catalog-backed recipe recommendations
pub mod recommendation;

pub use recommendation::{MealRecommendations, NutritionPlan, RecommendationService};
