// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports environment-driven server, catalog, CORS, and recommendation settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseUrl, Environment, RecommendationConfig, ServerConfig,
};
