//! Glo rating mathematics
//!
//! This module provides the score transform, the expected score model, the
//! performance rating solver, the dynamic K-factor and the combined rating
//! update for players and holes.

pub mod adjustment;
pub mod calculator;
pub mod constants;
pub mod expected;
pub mod k_factor;
pub mod performance;
pub mod round;
pub mod score;

// Re-export commonly used types
pub use adjustment::{HoleRatingAdjustment, IdentityAdjustment, OffsetAdjustment};
pub use calculator::{calc_rating_updates, GloRatingCalculator, RatingCalculator};
pub use expected::{calc_expected_score, calc_expected_score_with_scale};
pub use k_factor::{calc_player_k_factor, calc_player_k_factor_with};
pub use performance::{
    calc_performance_rating, estimate_performance, PerformanceEstimate, PerformanceRatingInput,
};
pub use round::process_round;
pub use score::{to_score, to_strokes, total_score};
