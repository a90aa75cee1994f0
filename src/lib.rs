//! Glo - Elo-family ratings for players and holes
//!
//! This crate computes player skill ratings and hole difficulty ratings from
//! observed strokes. All rating functions are pure: they take plain numbers
//! and return new numbers, leaving storage of ratings to the caller.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{GloError, Result};
pub use types::*;

// Re-export key components
pub use config::GloConfig;
pub use rating::{
    calc_expected_score, calc_performance_rating, calc_player_k_factor, calc_rating_updates,
    to_score, to_strokes, GloRatingCalculator, PerformanceRatingInput, RatingCalculator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
