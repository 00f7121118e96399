// ABOUTME: Main library entry point for the MealMatch recommendation server
// ABOUTME: Wires configuration, the recipe catalog, services, and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

#![deny(unsafe_code)]

//! # `MealMatch` Server
//!
//! HTTP API that turns body metrics into daily nutrition targets and matches
//! recipes from a catalog by nearest-neighbor search over nutrition profiles.
//!
//! ## Architecture
//!
//! - **`mealmatch-core`**: error types, constants, and recipe/person models
//! - **`mealmatch-intelligence`**: calculators, feature extraction, and matching
//! - **Database**: the [`database::RecipeCatalog`] store (`SQLite` or in-memory)
//! - **Services**: per-request recommendation orchestration
//! - **Routes**: thin axum handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealmatch_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Listening on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Recipe catalog storage
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Recommendation service layer
pub mod services;

/// Error types shared across the workspace
pub use mealmatch_core::errors;
