// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Sets process environment variables serially and checks parsing and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealmatch_server::config::{DatabaseUrl, Environment, ServerConfig};
use serial_test::serial;
use std::env;

const CONFIG_VARS: [&str; 9] = [
    "HOST",
    "HTTP_PORT",
    "DATABASE_URL",
    "CORS_ALLOWED_ORIGINS",
    "ENVIRONMENT",
    "MEAL_RECIPE_COUNT",
    "CUSTOM_RECIPE_COUNT",
    "MAX_RECIPE_COUNT",
    "RECOMMENDATION_SEED",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:5000");
    assert_eq!(config.database, DatabaseUrl::default());
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.recommendation.meal_recipe_count, 3);
    assert_eq!(config.recommendation.custom_recipe_count, 6);
    assert_eq!(config.recommendation.seed, None);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_config_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "8088");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("MEAL_RECIPE_COUNT", "5");
    env::set_var("RECOMMENDATION_SEED", "1234");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.bind_address(), "127.0.0.1:8088");
    assert!(config.database.is_memory());
    assert!(config.environment.is_production());
    assert_eq!(config.recommendation.meal_recipe_count, 5);
    assert_eq!(config.recommendation.seed, Some(1234));
    assert!(config.summary().contains("127.0.0.1:8088"));
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    clear_config_env();

    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());
    env::remove_var("HTTP_PORT");

    env::set_var("DATABASE_URL", "postgres://localhost/recipes");
    assert!(ServerConfig::from_env().is_err());
    env::remove_var("DATABASE_URL");

    env::set_var("CUSTOM_RECIPE_COUNT", "0");
    assert!(ServerConfig::from_env().is_err());
    clear_config_env();
}
