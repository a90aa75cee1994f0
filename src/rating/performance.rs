//! Performance rating solver
//!
//! Finds the single rating that would have been expected to produce a
//! player's total score over a set of holes. The sum of expected scores is
//! monotonically increasing in the candidate rating, so a bisection over a
//! fixed search range brackets the answer. The search runs a fixed number
//! of rounds with no tolerance check: the result is reproducible and its
//! precision is `(max_return - min_return) / 2^iterations`.

use crate::config::rating::PerformanceSearchConfig;
use crate::error::{GloError, Result};
use crate::rating::constants::RD;
use crate::rating::expected::calc_expected_score_with_scale;
use crate::types::{Rating, Score};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Input of a performance rating solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRatingInput {
    /// Ratings of every hole played in the round
    pub hole_ratings: Vec<Rating>,
    /// Total score achieved across those holes
    pub total_score: Score,
    /// Search bounds and iteration count
    #[serde(default)]
    pub search: PerformanceSearchConfig,
}

impl PerformanceRatingInput {
    pub fn new(hole_ratings: Vec<Rating>, total_score: Score) -> Self {
        Self {
            hole_ratings,
            total_score,
            search: PerformanceSearchConfig::default(),
        }
    }

    pub fn with_search(mut self, search: PerformanceSearchConfig) -> Self {
        self.search = search;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.hole_ratings.is_empty() {
            return Err(GloError::InvalidInput {
                reason: "No hole ratings provided for performance rating".to_string(),
            }
            .into());
        }

        if let Some(rating) = self.hole_ratings.iter().find(|r| !r.is_finite()) {
            return Err(GloError::InvalidInput {
                reason: format!("Hole rating must be finite, got {}", rating),
            }
            .into());
        }

        if !self.total_score.is_finite() {
            return Err(GloError::InvalidInput {
                reason: format!("Total score must be finite, got {}", self.total_score),
            }
            .into());
        }

        self.search.validate()
    }
}

/// Solved performance rating with diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    pub rating: Rating,
    /// Sum of expected scores at the last evaluated candidate
    pub expected_total: Score,
    /// The result may have saturated: it sits within two final search
    /// steps of a bound. The true rating may lie outside the search range,
    /// but a true rating just inside a bound is flagged as well.
    pub saturated: bool,
}

/// Solve the performance rating of a round.
///
/// If the true rating lies outside the search bounds the result saturates
/// at the nearer bound; use [`estimate_performance`] to detect that.
pub fn calc_performance_rating(input: &PerformanceRatingInput) -> Result<Rating> {
    estimate_performance(input).map(|estimate| estimate.rating)
}

/// Solve the performance rating of a round, reporting saturation
pub fn estimate_performance(input: &PerformanceRatingInput) -> Result<PerformanceEstimate> {
    estimate_performance_with_scale(input, RD)
}

/// Solve with an explicit rating difference scale for the expected score
pub fn estimate_performance_with_scale(
    input: &PerformanceRatingInput,
    rd: f64,
) -> Result<PerformanceEstimate> {
    input.validate()?;

    let search = &input.search;
    let mut offset = (search.max_return - search.min_return) / 2.0;
    let mut rating = search.min_return + offset;
    let mut sum = 0.0;

    for _ in 0..search.iterations {
        offset /= 2.0;
        sum = input
            .hole_ratings
            .iter()
            .map(|&hole_rating| calc_expected_score_with_scale(hole_rating, rating, rd))
            .sum::<f64>();

        if sum < input.total_score {
            rating += offset;
        } else if sum > input.total_score {
            rating -= offset;
        } else {
            debug!("Performance rating solved exactly at {}", rating);
            return Ok(PerformanceEstimate {
                rating,
                expected_total: sum,
                saturated: false,
            });
        }
    }

    // After the last step the candidate is within `offset` of where the
    // bisection would go next. A search that never turned ends two steps
    // from a bound, and so does a true rating just inside it.
    let saturated = rating - search.min_return <= 2.0 * offset
        || search.max_return - rating <= 2.0 * offset;

    if saturated {
        warn!(
            "Performance rating {} may have saturated at search bounds [{}, {}] for total score {}",
            rating, search.min_return, search.max_return, input.total_score
        );
    } else {
        debug!(
            "Performance rating {} after {} iterations (expected total {})",
            rating, search.iterations, sum
        );
    }

    Ok(PerformanceEstimate {
        rating,
        expected_total: sum,
        saturated,
    })
}
