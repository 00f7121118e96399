// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the web frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

use crate::config::CorsConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the recommendation API
///
/// `*` (or an empty value) allows any origin without credentials. An explicit
/// comma-separated list allows exactly those origins with credentials.
///
/// # Examples
///
/// ```bash
/// # Allow all origins
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,http://localhost:3000"
/// ```
#[must_use]
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let origins = parse_origins(&config.allowed_origins);

    let layer = CorsLayer::new()
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    if origins.is_empty() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}

// Empty result means "any origin"
fn parse_origins(allowed: &str) -> Vec<HeaderValue> {
    if allowed.trim() == "*" {
        return Vec::new();
    }

    allowed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("").is_empty());
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com"),
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://app.example.com"),
            ]
        );
    }
}
