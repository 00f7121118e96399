// ABOUTME: Integration tests for target synthesis and nearest-neighbor recipe matching
// ABOUTME: Covers ordering, result counts, record exclusion, and seeded determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{records_from, sample_recipe_documents_with_malformed, sample_recipes, FIXTURE_NUTRITION};
use mealmatch_core::errors::ErrorCode;
use mealmatch_intelligence::{
    extract_features, nearest_neighbors, EngineConfig, FeatureVector, RecommendationEngine,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn engine() -> RecommendationEngine {
    RecommendationEngine::new(EngineConfig::default())
}

fn names(recipes: &[mealmatch_core::models::NormalizedRecipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_exact_vector_ranks_its_recipe_first() {
    let catalog = sample_recipes();
    let (name, nutrition) = FIXTURE_NUTRITION[2];

    let recipes = engine().recommend_by_feature_vector(&catalog, &FeatureVector::new(nutrition), 3);

    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].name, name);
}

#[test]
fn test_neighbor_distances_are_non_decreasing_and_distinct() {
    let catalog = sample_recipes();
    let entries = extract_features(&catalog);
    let matrix: Vec<FeatureVector> = entries.iter().map(|e| e.features).collect();
    let target = FeatureVector::new([500.0, 20.0, 6.0, 60.0, 500.0, 50.0, 5.0, 15.0, 25.0]);

    let neighbors = nearest_neighbors(&matrix, &target, matrix.len());

    assert_eq!(neighbors.len(), matrix.len());
    for pair in neighbors.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    let mut indices: Vec<usize> = neighbors.iter().map(|n| n.index).collect();
    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), matrix.len());
}

#[test]
fn test_count_larger_than_catalog_returns_everything() {
    let catalog = sample_recipes();
    let recipes = engine().recommend_by_feature_vector(
        &catalog,
        &FeatureVector::new(FIXTURE_NUTRITION[0].1),
        100,
    );

    assert_eq!(recipes.len(), FIXTURE_NUTRITION.len());
}

#[test]
fn test_malformed_records_never_recommended() {
    let catalog = records_from(sample_recipe_documents_with_malformed());
    assert_eq!(extract_features(&catalog).len(), FIXTURE_NUTRITION.len());

    let recipes = engine().recommend_by_feature_vector(
        &catalog,
        &FeatureVector::new([400.0, 10.0, 3.0, 40.0, 500.0, 30.0, 4.0, 5.0, 25.0]),
        catalog.len(),
    );

    assert_eq!(recipes.len(), FIXTURE_NUTRITION.len());
    assert!(!names(&recipes).contains(&"Mystery Stew"));
}

#[test]
fn test_empty_catalog_is_empty_result() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let by_budget = engine()
        .recommend_by_calorie_budget(&[], 700.0, 5, &mut rng)
        .unwrap();
    let by_vector =
        engine().recommend_by_feature_vector(&[], &FeatureVector::new(FIXTURE_NUTRITION[0].1), 5);

    assert!(by_budget.is_empty());
    assert!(by_vector.is_empty());
}

#[test]
fn test_same_seed_same_recommendations() {
    let catalog = sample_recipes();

    let first = engine()
        .recommend_by_calorie_budget(&catalog, 650.0, 3, &mut ChaCha8Rng::seed_from_u64(42))
        .unwrap();
    let second = engine()
        .recommend_by_calorie_budget(&catalog, 650.0, 3, &mut ChaCha8Rng::seed_from_u64(42))
        .unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_non_positive_budget_rejected() {
    let catalog = sample_recipes();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for budget in [0.0, -250.0, f64::NAN] {
        let err = engine()
            .recommend_by_calorie_budget(&catalog, budget, 3, &mut rng)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_raw_vector_length_validated() {
    let err = FeatureVector::try_from([1.0, 2.0, 3.0].as_slice()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("exactly 9"));

    let ok = FeatureVector::try_from(FIXTURE_NUTRITION[1].1.as_slice()).unwrap();
    assert!((ok.calories() - 450.0).abs() < f64::EPSILON);
}
