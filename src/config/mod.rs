//! Configuration management for the Glo rating engine
//!
//! This module holds the numeric parameters of the rating model and the
//! environment-driven settings of the `glo` front end.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::{GloConfig, KFactorConfig, PerformanceSearchConfig};
