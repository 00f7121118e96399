// ABOUTME: Coerces semi-structured recipe documents into fixed 9-dimensional nutrition vectors
// ABOUTME: Records failing coercion in any field are excluded whole, never partially included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use mealmatch_core::constants::{FEATURE_DIMENSIONS, NUTRITION_FEATURES};
use mealmatch_core::errors::{AppError, AppResult};
use mealmatch_core::models::RecipeRecord;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Nutrition profile in catalog feature order:
/// calories, fat, saturated fat, cholesterol, sodium, carbohydrate, fiber, sugar, protein
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_DIMENSIONS]);

impl FeatureVector {
    /// Wrap a fixed-size array
    #[must_use]
    pub const fn new(values: [f64; FEATURE_DIMENSIONS]) -> Self {
        Self(values)
    }

    /// Borrow the raw values
    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_DIMENSIONS] {
        &self.0
    }

    /// Energy component (kcal)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.0[0]
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = AppError;

    fn try_from(values: &[f64]) -> AppResult<Self> {
        let array: [f64; FEATURE_DIMENSIONS] = values.try_into().map_err(|_| {
            AppError::invalid_input(format!(
                "Invalid nutrition values provided. Need exactly {FEATURE_DIMENSIONS} values, got {}",
                values.len()
            ))
        })?;

        if let Some(position) = array.iter().position(|v| !v.is_finite()) {
            return Err(AppError::invalid_input(format!(
                "Invalid nutrition value for {}: must be a finite number",
                NUTRITION_FEATURES[position]
            )));
        }

        Ok(Self(array))
    }
}

/// Why a single nutrition field could not be coerced
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoercionError {
    /// Field present but null
    #[error("field '{0}' is null")]
    Null(String),
    /// Field is neither a number nor a numeric string
    #[error("field '{field}' has non-numeric type {kind}")]
    WrongType {
        /// Field name
        field: String,
        /// JSON type found
        kind: &'static str,
    },
    /// String that does not parse as a float
    #[error("field '{field}' is not a number: {raw:?}")]
    Unparsable {
        /// Field name
        field: String,
        /// Offending text
        raw: String,
    },
    /// NaN or infinity
    #[error("field '{0}' is not finite")]
    NonFinite(String),
}

/// An accepted catalog record paired with its feature vector
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    /// Coerced nutrition profile
    pub features: FeatureVector,
    /// Source document
    pub record: &'a RecipeRecord,
}

/// Coerce one nutrition field; absent fields count as zero
///
/// Booleans coerce to 1.0 and 0.0.
///
/// # Errors
///
/// Returns [`CoercionError`] for null, non-numeric, unparsable or non-finite values
pub fn coerce_nutrition_field(record: &RecipeRecord, field: &str) -> Result<f64, CoercionError> {
    let value = match record.get(field) {
        None => return Ok(0.0),
        Some(Value::Null) => return Err(CoercionError::Null(field.to_owned())),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::String(s)) => {
            s.trim()
                .parse::<f64>()
                .map_err(|_| CoercionError::Unparsable {
                    field: field.to_owned(),
                    raw: s.clone(),
                })?
        }
        Some(other) => {
            return Err(CoercionError::WrongType {
                field: field.to_owned(),
                kind: json_kind(other),
            })
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoercionError::NonFinite(field.to_owned()))
    }
}

/// Coerce all nine nutrition fields of a record
///
/// # Errors
///
/// Returns the first field that fails coercion
pub fn feature_vector_for(record: &RecipeRecord) -> Result<FeatureVector, CoercionError> {
    let mut values = [0.0; FEATURE_DIMENSIONS];
    for (slot, field) in values.iter_mut().zip(NUTRITION_FEATURES) {
        *slot = coerce_nutrition_field(record, field)?;
    }
    Ok(FeatureVector(values))
}

/// Build the catalog matrix from raw documents, preserving catalog order
#[must_use]
pub fn extract_features(records: &[RecipeRecord]) -> Vec<CatalogEntry<'_>> {
    let entries: Vec<CatalogEntry<'_>> = records
        .iter()
        .filter_map(|record| match feature_vector_for(record) {
            Ok(features) => Some(CatalogEntry { features, record }),
            Err(e) => {
                debug!(recipe = record.name().unwrap_or("<unnamed>"), error = %e, "Excluding recipe from catalog matrix");
                None
            }
        })
        .collect();

    debug!(
        catalog_size = records.len(),
        accepted = entries.len(),
        "Extracted recipe feature vectors"
    );
    entries
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "scalar",
    }
}
