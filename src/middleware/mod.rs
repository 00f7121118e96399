// ABOUTME: HTTP middleware for the recommendation server
// ABOUTME: Cross-origin resource sharing configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

/// CORS layer configuration
pub mod cors;

pub use cors::setup_cors;
