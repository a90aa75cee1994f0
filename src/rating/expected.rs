//! Logistic expected score model

use crate::rating::constants::RD;
use crate::types::{Rating, Score};

/// Expected score of the competing side against a hole.
///
/// Uses the default rating difference scale of 360.
pub fn calc_expected_score(hole_rating: Rating, competing_rating: Rating) -> Score {
    calc_expected_score_with_scale(hole_rating, competing_rating, RD)
}

/// Expected score with an explicit rating difference scale
pub fn calc_expected_score_with_scale(
    hole_rating: Rating,
    competing_rating: Rating,
    rd: f64,
) -> Score {
    1.0 / (1.0 + 10f64.powf((hole_rating - competing_rating) / rd))
}
