//! Hole rating adjustment strategies
//!
//! Before a play is scored, the hole's rating may be adjusted for the
//! context the hole was played in (weather, tee position, pin placement).
//! The orchestrator only sees the [`HoleRatingAdjustment`] trait, so new
//! adjustments plug in without changing how updates are computed.

use crate::types::Rating;

/// Strategy that adjusts a hole rating given contextual details.
///
/// `details` is empty when the caller has no context for the play.
#[cfg_attr(test, mockall::automock)]
pub trait HoleRatingAdjustment: Send + Sync {
    fn adjust(&self, hole_rating: Rating, details: &[f64]) -> Rating;
}

/// Leaves the hole rating unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAdjustment;

impl HoleRatingAdjustment for IdentityAdjustment {
    fn adjust(&self, hole_rating: Rating, _details: &[f64]) -> Rating {
        hole_rating
    }
}

/// Shifts every hole rating by a fixed amount, e.g. for course conditions
/// that make all holes play harder on a given day
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetAdjustment {
    pub offset: f64,
}

impl OffsetAdjustment {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }
}

impl HoleRatingAdjustment for OffsetAdjustment {
    fn adjust(&self, hole_rating: Rating, _details: &[f64]) -> Rating {
        hole_rating + self.offset
    }
}

impl<F> HoleRatingAdjustment for F
where
    F: Fn(Rating, &[f64]) -> Rating + Send + Sync,
{
    fn adjust(&self, hole_rating: Rating, details: &[f64]) -> Rating {
        self(hole_rating, details)
    }
}
