// ABOUTME: Core types and constants for the MealMatch recommendation server
// ABOUTME: Foundation crate with error handling, recipe and body-metric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

#![deny(unsafe_code)]

//! # MealMatch Core
//!
//! Foundation crate providing shared types and constants for the MealMatch
//! recommendation server. It changes rarely, so the engine and server crates
//! can rebuild independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Catalog field names, output defaults, and the placeholder image
//! - **models**: Recipe documents, normalized recipes, and person/body-metric types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Catalog field names and output defaults
pub mod constants;

/// Core data models (recipes, normalized output, body metrics)
pub mod models;
