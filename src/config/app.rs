//! Main application configuration
//!
//! This module defines the top-level configuration of the `glo` front end,
//! including environment variable loading and validation.

use crate::config::rating::GloConfig;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: GloConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "glo".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", key, value)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Rating model
        if let Some(k_hole) = parse_var("GLO_K_HOLE")? {
            config.rating.k_hole = k_hole;
        }
        if let Some(r_weight) = parse_var("GLO_R_WEIGHT")? {
            config.rating.r_weight = r_weight;
        }
        if let Some(rd) = parse_var("GLO_RD")? {
            config.rating.rd = rd;
        }
        if let Some(k_player) = parse_var("GLO_K_PLAYER_DEFAULT")? {
            config.rating.k_factor.default = k_player;
        }
        if let Some(threshold) = parse_var("GLO_K_FACTOR_THRESHOLD")? {
            config.rating.k_factor.threshold = threshold;
        }

        // Performance search
        if let Some(min_return) = parse_var("GLO_SEARCH_MIN")? {
            config.rating.search.min_return = min_return;
        }
        if let Some(max_return) = parse_var("GLO_SEARCH_MAX")? {
            config.rating.search.max_return = max_return;
        }
        if let Some(iterations) = parse_var("GLO_SEARCH_ITERATIONS")? {
            config.rating.search.iterations = iterations;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()
}
