//! Test fixtures and recording implementations for integration testing

use glo_rating::error::Result;
use glo_rating::rating::expected::calc_expected_score;
use glo_rating::rating::score::to_strokes;
use glo_rating::rating::{GloRatingCalculator, RatingCalculator};
use glo_rating::types::{HolePlay, Rating, RatingUpdateInput, RatingUpdateResult, Score};
use std::sync::{Arc, Mutex};

/// Calculator that forwards to the Glo calculator and records every call
#[derive(Debug, Default)]
pub struct RecordingRatingCalculator {
    inner: GloRatingCalculator,
    update_calls: Arc<Mutex<Vec<RatingUpdateInput>>>,
    performance_calls: Arc<Mutex<Vec<(Vec<Rating>, Score)>>>,
}

impl RecordingRatingCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all update calls made (for testing)
    pub fn get_update_calls(&self) -> Vec<RatingUpdateInput> {
        self.update_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Get all performance rating calls made (for testing)
    pub fn get_performance_calls(&self) -> Vec<(Vec<Rating>, Score)> {
        self.performance_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for RecordingRatingCalculator {
    fn calc_rating_updates(&self, input: &RatingUpdateInput) -> Result<RatingUpdateResult> {
        if let Ok(mut calls) = self.update_calls.lock() {
            calls.push(*input);
        }
        self.inner.calc_rating_updates(input)
    }

    fn calc_performance_rating(&self, hole_ratings: &[Rating], total_score: Score) -> Result<Rating> {
        if let Ok(mut calls) = self.performance_calls.lock() {
            calls.push((hole_ratings.to_vec(), total_score));
        }
        self.inner.calc_performance_rating(hole_ratings, total_score)
    }

    fn config(&self) -> serde_json::Value {
        self.inner.config()
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        self.inner.update_config(config)
    }
}

/// Nine holes spread around a 1600 course rating
pub fn sample_course() -> Vec<Rating> {
    vec![
        1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1550.0, 1650.0, 1450.0, 1750.0,
    ]
}

/// Strokes a player of the given true rating makes on average on a hole of
/// the given true rating
pub fn typical_strokes(hole_rating: Rating, player_rating: Rating) -> f64 {
    to_strokes(calc_expected_score(hole_rating, player_rating))
        .expect("expected score is inside (0, 1)")
}

/// A round played at exactly the level of `player_rating`
pub fn typical_round(course: &[Rating], player_rating: Rating) -> Vec<HolePlay> {
    course
        .iter()
        .map(|&hole_rating| HolePlay {
            hole_rating,
            strokes: typical_strokes(hole_rating, player_rating),
        })
        .collect()
}
