// ABOUTME: Per-request standardization transform and cosine-distance nearest-neighbor search
// ABOUTME: Fit on the catalog matrix only; the target is transformed with the catalog fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Similarity Search
//!
//! Standardization uses the population standard deviation per dimension. A
//! constant column keeps unit scale so it contributes zero after centering
//! instead of dividing by zero.

use crate::features::FeatureVector;
use mealmatch_core::constants::FEATURE_DIMENSIONS;
use serde::Serialize;

/// Zero-mean, unit-variance transform fitted on a catalog matrix
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    means: [f64; FEATURE_DIMENSIONS],
    scales: [f64; FEATURE_DIMENSIONS],
}

impl StandardScaler {
    /// Fit per-dimension mean and scale; `None` for an empty matrix
    #[must_use]
    pub fn fit(rows: &[FeatureVector]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let n = rows.len() as f64;

        let mut means = [0.0; FEATURE_DIMENSIONS];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row.values()) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut scales = [0.0; FEATURE_DIMENSIONS];
        for row in rows {
            for ((acc, value), mean) in scales.iter_mut().zip(row.values()).zip(&means) {
                let delta = value - mean;
                *acc += delta * delta;
            }
        }
        for scale in &mut scales {
            let std_dev = (*scale / n).sqrt();
            *scale = if std_dev <= f64::EPSILON { 1.0 } else { std_dev };
        }

        Some(Self { means, scales })
    }

    /// Apply the fitted transform to one vector
    #[must_use]
    pub fn transform(&self, vector: &FeatureVector) -> [f64; FEATURE_DIMENSIONS] {
        let mut out = *vector.values();
        for ((value, mean), scale) in out.iter_mut().zip(&self.means).zip(&self.scales) {
            *value = (*value - mean) / scale;
        }
        out
    }
}

/// Cosine distance in `[0, 2]`; a zero-norm operand is at distance 1
#[must_use]
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 1.0;
    }
    (1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 2.0)
}

/// A catalog row selected by the search
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Position in the catalog matrix
    pub index: usize,
    /// Cosine distance from the standardized target
    pub distance: f64,
}

/// Return the `min(k, catalog.len())` closest rows by cosine distance
///
/// The transform is fitted on `catalog` and reapplied to `target`. Results are
/// ordered by ascending distance; equal distances keep catalog order.
#[must_use]
pub fn nearest_neighbors(catalog: &[FeatureVector], target: &FeatureVector, k: usize) -> Vec<Neighbor> {
    let Some(scaler) = StandardScaler::fit(catalog) else {
        return Vec::new();
    };
    if k == 0 {
        return Vec::new();
    }

    let target = scaler.transform(target);
    let mut neighbors: Vec<Neighbor> = catalog
        .iter()
        .enumerate()
        .map(|(index, row)| Neighbor {
            index,
            distance: cosine_distance(&scaler.transform(row), &target),
        })
        .collect();

    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    neighbors.truncate(k);
    neighbors
}
