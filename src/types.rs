//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};

/// Relative skill (player) or difficulty (hole) measure
pub type Rating = f64;

/// Raw performance measure for a single play, lower is better
pub type Strokes = f64;

/// Normalized performance in the open interval (0, 1)
pub type Score = f64;

/// A single observed play of one hole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdateInput {
    pub player_rating: Rating,
    pub hole_rating: Rating,
    pub strokes: Strokes,
    /// Performance rating of the round this play belongs to.
    /// Defaults to 0, which pulls the blended player rating down.
    #[serde(default)]
    pub performance_rating: Rating,
}

impl RatingUpdateInput {
    pub fn new(player_rating: Rating, hole_rating: Rating, strokes: Strokes) -> Self {
        Self {
            player_rating,
            hole_rating,
            strokes,
            performance_rating: 0.0,
        }
    }

    pub fn with_performance_rating(mut self, performance_rating: Rating) -> Self {
        self.performance_rating = performance_rating;
        self
    }
}

/// Updated ratings produced from a single play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdateResult {
    pub player_rating: Rating,
    pub hole_rating: Rating,
}

/// One hole of a round: the hole's current rating and the strokes recorded on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HolePlay {
    pub hole_rating: Rating,
    pub strokes: Strokes,
}

/// Outcome of processing a whole round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundUpdate {
    /// Player rating before the round
    pub old_player_rating: Rating,
    /// Player rating after every play of the round was applied
    pub new_player_rating: Rating,
    /// Performance rating solved from the round
    pub performance_rating: Rating,
    /// New hole ratings, in the order the plays were given
    pub hole_ratings: Vec<Rating>,
}

impl RoundUpdate {
    /// Net change of the player's rating over the round
    pub fn player_delta(&self) -> f64 {
        self.new_player_rating - self.old_player_rating
    }
}
