//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum GloError {
    #[error("Value outside the domain of {operation}: {value}")]
    InvalidDomain { operation: String, value: f64 },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
