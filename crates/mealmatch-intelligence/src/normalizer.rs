// ABOUTME: Maps matched catalog documents into the uniform recipe output contract
// ABOUTME: Resolves list-shaped fields, sanitizes image URLs, and applies output defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Recipe Normalizer
//!
//! Image sanitization steps, applied to each candidate independently:
//!
//! 1. trim whitespace
//! 2. unwrap a `["url"]` JSON-array wrapper
//! 3. un-escape `\"` sequences
//! 4. keep only the first `http(s)://...<image extension>` match, dropping any
//!    trailing query string or junk
//! 5. otherwise add a scheme to `//host` and `www.host` forms
//! 6. drop empty results

use crate::features::coerce_nutrition_field;
use mealmatch_core::constants::{recipe_defaults, recipe_fields};
use mealmatch_core::models::{ListField, NormalizedRecipe, RecipeNutrition, RecipeRecord};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

const IMAGE_URL_PATTERN: &str =
    r#"(?i)(https?://[^"'\s]+\.(?:jpg|jpeg|png|gif|bmp|webp|svg|tiff))"#;

static IMAGE_URL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn image_url_regex() -> Option<&'static Regex> {
    IMAGE_URL_REGEX
        .get_or_init(|| Regex::new(IMAGE_URL_PATTERN).ok())
        .as_ref()
}

/// Collapse a list-shaped field into a plain list of strings
#[must_use]
pub fn resolve_list_field(field: ListField) -> Vec<String> {
    match field {
        ListField::NativeList(items) => items,
        ListField::SingleString(item) => vec![item],
        ListField::LegacyVectorLiteral(literal) => parse_vector_literal(&literal),
    }
}

// c("a", "b") -> ["a", "b"]
fn parse_vector_literal(literal: &str) -> Vec<String> {
    let inner = literal.strip_prefix("c(").unwrap_or(literal);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner
        .split(',')
        .map(|part| part.trim_matches([' ', '"', '\'']).to_owned())
        .collect()
}

/// Clean one image URL candidate; `None` when nothing usable remains
#[must_use]
pub fn sanitize_image_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    // The bracket markers may overlap, as in `["]`, which leaves nothing inside
    let unwrapped = if trimmed.starts_with("[\"") && trimmed.ends_with("\"]") {
        trimmed.get(2..trimmed.len() - 2).unwrap_or_default()
    } else {
        trimmed
    };
    let unescaped = unwrapped.replace("\\\"", "\"").replace("\\\\\"", "\"");

    if let Some(found) = image_url_regex().and_then(|re| re.find(&unescaped)) {
        return Some(found.as_str().to_owned());
    }

    if unescaped.is_empty() {
        return None;
    }
    if unescaped.starts_with("http://") || unescaped.starts_with("https://") {
        return Some(unescaped);
    }
    if unescaped.starts_with("//") {
        return Some(format!("https:{unescaped}"));
    }
    if unescaped.starts_with("www.") {
        return Some(format!("https://{unescaped}"));
    }
    Some(unescaped)
}

/// Build the output shape for one matched catalog document
#[must_use]
pub fn normalize_recipe(record: &RecipeRecord) -> NormalizedRecipe {
    let mut images: Vec<String> = list_field(record, recipe_fields::IMAGES)
        .iter()
        .filter_map(|candidate| sanitize_image_url(candidate))
        .collect();
    if images.is_empty() {
        images.push(recipe_defaults::IMAGE_NOT_FOUND.to_owned());
    }

    NormalizedRecipe {
        name: text_field(record, recipe_fields::NAME, recipe_defaults::NAME),
        calories: number_field(record, recipe_fields::CALORIES),
        ingredient_parts: list_field(record, recipe_fields::INGREDIENT_PARTS),
        cook_time: text_field(record, recipe_fields::COOK_TIME, recipe_defaults::COOK_TIME),
        prep_time: text_field(record, recipe_fields::PREP_TIME, recipe_defaults::PREP_TIME),
        total_time: text_field(record, recipe_fields::TOTAL_TIME, recipe_defaults::TOTAL_TIME),
        images,
        instructions: list_field(record, recipe_fields::INSTRUCTIONS),
        nutrition: RecipeNutrition {
            protein: number_field(record, recipe_fields::PROTEIN),
            carbs: number_field(record, recipe_fields::CARBOHYDRATE),
            fats: number_field(record, recipe_fields::FAT),
        },
    }
}

fn list_field(record: &RecipeRecord, key: &str) -> Vec<String> {
    ListField::from_value(record.get(key))
        .map(resolve_list_field)
        .unwrap_or_default()
}

fn number_field(record: &RecipeRecord, key: &str) -> f64 {
    coerce_nutrition_field(record, key).unwrap_or(0.0)
}

fn text_field(record: &RecipeRecord, key: &str, default: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => default.to_owned(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vector_literal_and_single_string() {
        assert_eq!(
            resolve_list_field(ListField::LegacyVectorLiteral(r#"c("a", "b","c")"#.into())),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            resolve_list_field(ListField::SingleString("x".into())),
            vec!["x"]
        );
        assert!(resolve_list_field(ListField::LegacyVectorLiteral("c()".into())).is_empty());
    }

    #[test]
    fn test_clean_url_is_unchanged() {
        let url = "https://host/path/img.jpg";
        assert_eq!(sanitize_image_url(url).as_deref(), Some(url));
        let again = sanitize_image_url(url).unwrap();
        assert_eq!(sanitize_image_url(&again).as_deref(), Some(url));
    }

    #[test]
    fn test_url_truncated_after_extension() {
        assert_eq!(
            sanitize_image_url("  [\"https://cdn.test/a/Pic.JPG?w=300&h=200\"] ").as_deref(),
            Some("https://cdn.test/a/Pic.JPG")
        );
        assert_eq!(
            sanitize_image_url(r#"junk \"https://cdn.test/b.png\" more"#).as_deref(),
            Some("https://cdn.test/b.png")
        );
    }

    #[test]
    fn test_overlapping_list_markers_leave_no_url() {
        assert_eq!(sanitize_image_url("[\"]"), None);
        assert_eq!(sanitize_image_url(" [\"\"] "), None);
    }

    #[test]
    fn test_scheme_added_to_bare_hosts() {
        assert_eq!(
            sanitize_image_url("//cdn.test/photo").as_deref(),
            Some("https://cdn.test/photo")
        );
        assert_eq!(
            sanitize_image_url("www.cdn.test/photo").as_deref(),
            Some("https://www.cdn.test/photo")
        );
        assert_eq!(sanitize_image_url("   "), None);
    }

    #[test]
    fn test_normalize_applies_defaults_and_placeholder() {
        let record = RecipeRecord::from_value(json!({
            "calories": "410",
            "proteincontent": 30,
            "images": ["", "  "],
        }))
        .unwrap();
        let recipe = normalize_recipe(&record);

        assert_eq!(recipe.name, "Recipe");
        assert!((recipe.calories - 410.0).abs() < f64::EPSILON);
        assert_eq!(recipe.cook_time, "PT30M");
        assert_eq!(recipe.prep_time, "PT15M");
        assert_eq!(recipe.total_time, "PT45M");
        assert_eq!(recipe.images, vec![recipe_defaults::IMAGE_NOT_FOUND]);
        assert!(recipe.ingredient_parts.is_empty());
        assert!((recipe.nutrition.protein - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_resolves_legacy_lists() {
        let record = RecipeRecord::from_value(json!({
            "name": "Chili",
            "recipeingredientparts": "c(\"beans\", \"tomato\")",
            "recipeinstructions": "Simmer for an hour.",
            "images": "c(\"https://img.test/chili.webp\")",
            "cooktime": "PT1H",
        }))
        .unwrap();
        let recipe = normalize_recipe(&record);

        assert_eq!(recipe.ingredient_parts, vec!["beans", "tomato"]);
        assert_eq!(recipe.instructions, vec!["Simmer for an hour."]);
        assert_eq!(recipe.images, vec!["https://img.test/chili.webp"]);
        assert_eq!(recipe.cook_time, "PT1H");
    }
}
