// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses server, catalog store, CORS, and recommendation settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! Environment-based configuration management

use anyhow::{anyhow, Context, Result};
use mealmatch_intelligence::EngineConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is unset (local frontend dev servers)
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000,http://127.0.0.1:3001";

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe catalog database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for empty URLs or non-`SQLite` schemes
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Database URL must not be empty"));
        }

        if let Some(path_str) = trimmed.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                return Ok(Self::Memory);
            }
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            return Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            });
        }

        if trimmed.contains("://") {
            return Err(anyhow!(
                "Unsupported database URL '{trimmed}': only sqlite: URLs are supported"
            ));
        }

        // Bare path: treat as SQLite file
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/recipes.db"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_CORS_ORIGINS.to_owned(),
        }
    }
}

/// Recipe recommendation limits and randomness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Recipes returned per meal on the body-metrics path
    pub meal_recipe_count: usize,
    /// Default count on the feature-vector path
    pub custom_recipe_count: usize,
    /// Upper bound on any caller-requested count
    pub max_recipe_count: usize,
    /// Fixed seed for target synthesis; fresh entropy per request when unset
    pub seed: Option<u64>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            meal_recipe_count: 3,
            custom_recipe_count: 6,
            max_recipe_count: 50,
            seed: None,
        }
    }
}

impl RecommendationConfig {
    /// Clamp a requested count to the configured maximum
    #[must_use]
    pub fn clamp_count(&self, requested: usize) -> usize {
        requested.min(self.max_recipe_count)
    }

    fn validate(&self) -> Result<()> {
        if self.max_recipe_count == 0 {
            return Err(anyhow!("MAX_RECIPE_COUNT must be at least 1"));
        }
        if self.meal_recipe_count == 0 || self.meal_recipe_count > self.max_recipe_count {
            return Err(anyhow!(
                "MEAL_RECIPE_COUNT must be between 1 and {}",
                self.max_recipe_count
            ));
        }
        if self.custom_recipe_count == 0 || self.custom_recipe_count > self.max_recipe_count {
            return Err(anyhow!(
                "CUSTOM_RECIPE_COUNT must be between 1 and {}",
                self.max_recipe_count
            ));
        }
        Ok(())
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Recipe catalog location
    pub database: DatabaseUrl,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
    /// Recommendation limits
    pub recommendation: RecommendationConfig,
    /// Engine formulas and constants
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            http_port: 5000,
            database: DatabaseUrl::default(),
            cors: CorsConfig::default(),
            environment: Environment::default(),
            recommendation: RecommendationConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable fails to parse or the result is invalid
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", "0.0.0.0"),
            http_port: parse_env("HTTP_PORT", 5000)?,
            database: DatabaseUrl::parse_url(&env_var_or(
                "DATABASE_URL",
                "sqlite:./data/recipes.db",
            ))
            .context("Invalid DATABASE_URL")?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS),
            },
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            recommendation: RecommendationConfig {
                meal_recipe_count: parse_env("MEAL_RECIPE_COUNT", 3)?,
                custom_recipe_count: parse_env("CUSTOM_RECIPE_COUNT", 6)?,
                max_recipe_count: parse_env("MAX_RECIPE_COUNT", 50)?,
                seed: parse_optional_env("RECOMMENDATION_SEED")?,
            },
            engine: EngineConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the assembled configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must not be 0"));
        }
        self.recommendation.validate()?;
        self.engine
            .validate()
            .map_err(|e| anyhow!("Invalid engine configuration: {e}"))
    }

    /// Socket address string for the HTTP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "MealMatch Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Catalog: {}\n\
             - CORS Origins: {}\n\
             - Recipes per meal: {}\n\
             - Custom recipe default: {}\n\
             - Max recipes per request: {}\n\
             - Seeded recommendations: {}",
            self.bind_address(),
            self.environment,
            self.database.to_connection_string(),
            self.cors.allowed_origins,
            self.recommendation.meal_recipe_count,
            self.recommendation.custom_recipe_count,
            self.recommendation.max_recipe_count,
            if self.recommendation.seed.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn parse_optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/recipes.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/recipes.db")
            }
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/recipes").is_err());
        assert!(DatabaseUrl::parse_url("  ").is_err());
    }

    #[test]
    fn test_connection_string_round_trip() {
        let url = DatabaseUrl::parse_url("sqlite:/tmp/recipes.db").unwrap();
        assert_eq!(url.to_connection_string(), "sqlite:/tmp/recipes.db");
        assert!(DatabaseUrl::Memory.is_memory());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_recommendation_limits_validated() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.recommendation.meal_recipe_count = 80;
        assert!(config.validate().is_err());

        config.recommendation.meal_recipe_count = 3;
        assert_eq!(config.recommendation.clamp_count(500), 50);
    }
}
