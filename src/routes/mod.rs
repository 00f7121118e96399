// ABOUTME: Route module organization for the recommendation HTTP API
// ABOUTME: Groups the health and nutrition endpoints by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Route module for the recommendation server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Service banner and health check routes
pub mod health;
/// Nutrition target and recipe recommendation routes
pub mod nutrition;

/// Health check route handlers
pub use health::HealthRoutes;
/// Nutrition route handlers
pub use nutrition::{CustomNutritionRequest, NutritionRequest, NutritionResponse, NutritionRoutes};
