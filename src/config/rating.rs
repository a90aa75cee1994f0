//! Rating system configuration
//!
//! Every numeric parameter of the Glo model lives here with its documented
//! default, so callers never rely on positional optional arguments.

use crate::error::{GloError, Result};
use crate::rating::constants::*;
use serde::{Deserialize, Serialize};

/// Finite and strictly positive; NaN and infinities fail
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Bounds and iteration count of the performance rating search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSearchConfig {
    /// Lower bound of the search (default 0)
    pub min_return: f64,
    /// Upper bound of the search (default 3000)
    pub max_return: f64,
    /// Number of bisection rounds (default 8)
    pub iterations: u32,
}

impl Default for PerformanceSearchConfig {
    fn default() -> Self {
        Self {
            min_return: SEARCH_MIN_RETURN,
            max_return: SEARCH_MAX_RETURN,
            iterations: SEARCH_ITERATIONS,
        }
    }
}

impl PerformanceSearchConfig {
    /// Worst-case distance between the returned and the true rating,
    /// provided the true rating lies inside the bounds
    pub fn resolution(&self) -> f64 {
        (self.max_return - self.min_return) / 2f64.powf(f64::from(self.iterations))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_return.is_finite() || !self.max_return.is_finite() {
            return Err(GloError::ConfigurationError {
                message: "Search bounds must be finite".to_string(),
            }
            .into());
        }

        if self.min_return >= self.max_return {
            return Err(GloError::ConfigurationError {
                message: format!(
                    "min_return ({}) must be less than max_return ({})",
                    self.min_return, self.max_return
                ),
            }
            .into());
        }

        if self.iterations == 0 {
            return Err(GloError::ConfigurationError {
                message: "Search iterations must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Shape of the dynamic player K-factor curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KFactorConfig {
    /// Rating at and above which `default` applies
    pub threshold: f64,
    /// K-factor of established players
    pub default: f64,
    pub scale: f64,
    pub base_variance: f64,
    pub spread: f64,
}

impl Default for KFactorConfig {
    fn default() -> Self {
        Self {
            threshold: K_FACTOR_THRESHOLD,
            default: K_PLAYER_DEFAULT,
            scale: K_FACTOR_SCALE,
            base_variance: K_FACTOR_BASE_VARIANCE,
            spread: K_FACTOR_SPREAD,
        }
    }
}

impl KFactorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(GloError::ConfigurationError {
                message: format!("K-factor threshold must be finite, got {}", self.threshold),
            }
            .into());
        }

        if !is_positive(self.default) || !is_positive(self.scale) {
            return Err(GloError::ConfigurationError {
                message: "K-factor default and scale must be positive".to_string(),
            }
            .into());
        }

        if !(self.base_variance.is_finite() && self.base_variance >= 0.0)
            || !is_positive(self.spread)
        {
            return Err(GloError::ConfigurationError {
                message: "K-factor base variance must be non-negative and spread positive"
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Complete parameter set of the Glo rating model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GloConfig {
    /// K-factor of hole rating updates (default 35)
    pub k_hole: f64,
    /// Blend weight of the performance rating (default 0.2)
    pub r_weight: f64,
    /// Rating difference scale of the expected score (default 360)
    pub rd: f64,
    pub k_factor: KFactorConfig,
    pub search: PerformanceSearchConfig,
}

impl Default for GloConfig {
    fn default() -> Self {
        Self {
            k_hole: K_HOLE,
            r_weight: R_WEIGHT,
            rd: RD,
            k_factor: KFactorConfig::default(),
            search: PerformanceSearchConfig::default(),
        }
    }
}

impl GloConfig {
    /// Slower rating movement, finer performance search
    pub fn conservative() -> Self {
        Self {
            k_hole: 25.0,
            r_weight: 0.1,
            search: PerformanceSearchConfig {
                iterations: 12,
                ..PerformanceSearchConfig::default()
            },
            ..Self::default()
        }
    }

    /// Faster rating movement for young courses and player pools
    pub fn aggressive() -> Self {
        Self {
            k_hole: 50.0,
            r_weight: 0.3,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.k_hole) {
            return Err(GloError::ConfigurationError {
                message: "Hole K-factor must be positive".to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.r_weight) {
            return Err(GloError::ConfigurationError {
                message: "Performance weight must be within [0, 1]".to_string(),
            }
            .into());
        }

        if !is_positive(self.rd) {
            return Err(GloError::ConfigurationError {
                message: "Rating difference scale must be positive".to_string(),
            }
            .into());
        }

        self.k_factor.validate()?;
        self.search.validate()?;

        Ok(())
    }
}
