// ABOUTME: Recommendation API server binary
// ABOUTME: Loads configuration, opens the recipe catalog, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealMatch Contributors

//! # `MealMatch` Server Binary
//!
//! Starts the nutrition and recipe recommendation HTTP API.

use anyhow::Result;
use clap::Parser;
use mealmatch_server::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealmatch-server")]
#[command(about = "MealMatch - nutrition targets and recipe recommendations over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override catalog database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database = mealmatch_server::config::DatabaseUrl::parse_url(&url)?;
    }
    config.validate()?;

    logging::init_from_env()?;
    info!("Starting MealMatch recommendation server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::connect(config).await?);

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accept_port_and_database_overrides() {
        let args = Args::try_parse_from([
            "mealmatch-server",
            "--http-port",
            "9090",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();

        assert_eq!(args.http_port, Some(9090));
        assert_eq!(args.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(Args::try_parse_from(["mealmatch-server", "--http-port", "high"]).is_err());
    }
}
