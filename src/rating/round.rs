//! Round processing
//!
//! A round is scored in two passes. The first solves the player's
//! performance rating from every hole of the round; the second applies the
//! single-play update to each hole in order, carrying the player's running
//! rating forward while every hole is updated once from its own play.

use crate::error::{GloError, Result};
use crate::rating::calculator::RatingCalculator;
use crate::rating::score::total_score;
use crate::types::{HolePlay, Rating, RatingUpdateInput, RoundUpdate};
use tracing::debug;

/// Apply a whole round of plays for one player
pub fn process_round<C: RatingCalculator + ?Sized>(
    calculator: &C,
    player_rating: Rating,
    plays: &[HolePlay],
) -> Result<RoundUpdate> {
    if plays.is_empty() {
        return Err(GloError::InvalidInput {
            reason: "No plays provided for round".to_string(),
        }
        .into());
    }

    let hole_ratings: Vec<Rating> = plays.iter().map(|play| play.hole_rating).collect();
    let strokes: Vec<f64> = plays.iter().map(|play| play.strokes).collect();

    let performance_rating =
        calculator.calc_performance_rating(&hole_ratings, total_score(&strokes))?;

    let mut current_rating = player_rating;
    let mut new_hole_ratings = Vec::with_capacity(plays.len());

    for play in plays {
        let input = RatingUpdateInput::new(current_rating, play.hole_rating, play.strokes)
            .with_performance_rating(performance_rating);
        let result = calculator.calc_rating_updates(&input)?;

        current_rating = result.player_rating;
        new_hole_ratings.push(result.hole_rating);
    }

    debug!(
        "Round of {} holes: performance {}, player {} -> {}",
        plays.len(),
        performance_rating,
        player_rating,
        current_rating
    );

    Ok(RoundUpdate {
        old_player_rating: player_rating,
        new_player_rating: current_rating,
        performance_rating,
        hole_ratings: new_hole_ratings,
    })
}
