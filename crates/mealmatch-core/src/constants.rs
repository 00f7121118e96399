// ABOUTME: Catalog field names, output defaults, and fixed fallback values
// ABOUTME: Single source for the nutrition feature layout used by the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

/// Recipe document field names as stored in the catalog
pub mod recipe_fields {
    /// Recipe display name
    pub const NAME: &str = "name";
    /// Energy (kcal)
    pub const CALORIES: &str = "calories";
    /// Total fat (g)
    pub const FAT: &str = "fatcontent";
    /// Saturated fat (g)
    pub const SATURATED_FAT: &str = "saturatedfatcontent";
    /// Cholesterol (mg)
    pub const CHOLESTEROL: &str = "cholesterolcontent";
    /// Sodium (mg)
    pub const SODIUM: &str = "sodiumcontent";
    /// Carbohydrate (g)
    pub const CARBOHYDRATE: &str = "carbohydratecontent";
    /// Fiber (g)
    pub const FIBER: &str = "fibercontent";
    /// Sugar (g)
    pub const SUGAR: &str = "sugarcontent";
    /// Protein (g)
    pub const PROTEIN: &str = "proteincontent";
    /// Ingredient list
    pub const INGREDIENT_PARTS: &str = "recipeingredientparts";
    /// Instruction steps
    pub const INSTRUCTIONS: &str = "recipeinstructions";
    /// Image URLs
    pub const IMAGES: &str = "images";
    /// ISO-8601 cook duration
    pub const COOK_TIME: &str = "cooktime";
    /// ISO-8601 prep duration
    pub const PREP_TIME: &str = "preptime";
    /// ISO-8601 total duration
    pub const TOTAL_TIME: &str = "totaltime";
}

/// Number of dimensions in a nutrition feature vector
pub const FEATURE_DIMENSIONS: usize = 9;

/// Nutrition fields in feature-vector order
pub const NUTRITION_FEATURES: [&str; FEATURE_DIMENSIONS] = [
    recipe_fields::CALORIES,
    recipe_fields::FAT,
    recipe_fields::SATURATED_FAT,
    recipe_fields::CHOLESTEROL,
    recipe_fields::SODIUM,
    recipe_fields::CARBOHYDRATE,
    recipe_fields::FIBER,
    recipe_fields::SUGAR,
    recipe_fields::PROTEIN,
];

/// Defaults applied when normalizing matched recipes
pub mod recipe_defaults {
    /// Name used when a document has none
    pub const NAME: &str = "Recipe";
    /// Cook time when absent
    pub const COOK_TIME: &str = "PT30M";
    /// Prep time when absent
    pub const PREP_TIME: &str = "PT15M";
    /// Total time when absent
    pub const TOTAL_TIME: &str = "PT45M";
    /// Substituted when no usable image URL survives sanitization
    pub const IMAGE_NOT_FOUND: &str = "https://media.giphy.com/media/v1.Y2lkPTc5MGI3NjExdnU3am03cGpvdnE5MDlsNGt0bG03cnppZDVybmJoY2V3c29taXBpdCZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/pVbhJvVUYqx2A8oT8G/giphy.gif";
}

/// Service identity used by logging
pub mod service_names {
    /// Server service name
    pub const MEALMATCH_SERVER: &str = "mealmatch-server";
}
