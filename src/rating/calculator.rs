//! Rating calculator trait and the Glo implementation
//!
//! A single play updates both sides: the player moves by their dynamic
//! K-factor times the surprise of the result, and the hole moves the other
//! way by the fixed hole K-factor.

use crate::config::rating::GloConfig;
use crate::error::{GloError, Result};
use crate::rating::adjustment::{HoleRatingAdjustment, IdentityAdjustment};
use crate::rating::expected::calc_expected_score_with_scale;
use crate::rating::k_factor::calc_player_k_factor_with;
use crate::rating::performance::{estimate_performance_with_scale, PerformanceRatingInput};
use crate::rating::round;
use crate::rating::score::to_score;
use crate::types::{HolePlay, Rating, RatingUpdateInput, RatingUpdateResult, RoundUpdate, Score};
use tracing::debug;

/// Trait for calculating rating changes after plays
pub trait RatingCalculator: Send + Sync {
    /// Calculate new player and hole ratings from a single play
    fn calc_rating_updates(&self, input: &RatingUpdateInput) -> Result<RatingUpdateResult>;

    /// Solve the performance rating of a round
    ///
    /// # Arguments
    /// * `hole_ratings` - Ratings of every hole in the round
    /// * `total_score` - Total score the player achieved on those holes
    fn calc_performance_rating(&self, hole_ratings: &[Rating], total_score: Score)
        -> Result<Rating>;

    /// Apply a whole round of plays for one player
    fn process_round(&self, player_rating: Rating, plays: &[HolePlay]) -> Result<RoundUpdate> {
        round::process_round(self, player_rating, plays)
    }

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> Result<()>;
}

/// Glo rating calculator
pub struct GloRatingCalculator {
    config: GloConfig,
    adjustment: Box<dyn HoleRatingAdjustment>,
}

impl std::fmt::Debug for GloRatingCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GloRatingCalculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for GloRatingCalculator {
    fn default() -> Self {
        Self {
            config: GloConfig::default(),
            adjustment: Box::new(IdentityAdjustment),
        }
    }
}

impl GloRatingCalculator {
    /// Create a new calculator with the identity hole adjustment
    pub fn new(config: GloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            adjustment: Box::new(IdentityAdjustment),
        })
    }

    /// Replace the hole rating adjustment strategy
    pub fn with_adjustment(mut self, adjustment: impl HoleRatingAdjustment + 'static) -> Self {
        self.adjustment = Box::new(adjustment);
        self
    }

    pub fn glo_config(&self) -> &GloConfig {
        &self.config
    }

    /// Weighted blend of the player's rating toward the performance rating
    pub fn modify_player_rating(&self, player_rating: Rating, performance_rating: Rating) -> Rating {
        player_rating + self.config.r_weight * (performance_rating - player_rating)
    }

    /// Calculate new ratings, passing contextual details to the hole adjustment
    pub fn calc_rating_updates_with_details(
        &self,
        input: &RatingUpdateInput,
        details: &[f64],
    ) -> Result<RatingUpdateResult> {
        validate_update_input(input)?;

        let modified_hole_rating = self.adjustment.adjust(input.hole_rating, details);
        let modified_player_rating =
            self.modify_player_rating(input.player_rating, input.performance_rating);

        let expected_score =
            calc_expected_score_with_scale(modified_hole_rating, modified_player_rating, self.config.rd);
        let actual_score = to_score(input.strokes);

        // The K-factor follows the unblended rating
        let player_k_factor = calc_player_k_factor_with(input.player_rating, &self.config.k_factor);

        let result = RatingUpdateResult {
            player_rating: input.player_rating + player_k_factor * (actual_score - expected_score),
            hole_rating: input.hole_rating + self.config.k_hole * (expected_score - actual_score),
        };

        debug!(
            "Rating update: expected {:.4}, actual {:.4}, player {} -> {}, hole {} -> {}",
            expected_score,
            actual_score,
            input.player_rating,
            result.player_rating,
            input.hole_rating,
            result.hole_rating
        );

        Ok(result)
    }
}

fn validate_update_input(input: &RatingUpdateInput) -> Result<()> {
    let fields = [
        ("player_rating", input.player_rating),
        ("hole_rating", input.hole_rating),
        ("strokes", input.strokes),
        ("performance_rating", input.performance_rating),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            return Err(GloError::InvalidInput {
                reason: format!("{} must be finite, got {}", name, value),
            }
            .into());
        }
    }

    Ok(())
}

impl RatingCalculator for GloRatingCalculator {
    fn calc_rating_updates(&self, input: &RatingUpdateInput) -> Result<RatingUpdateResult> {
        self.calc_rating_updates_with_details(input, &[])
    }

    fn calc_performance_rating(
        &self,
        hole_ratings: &[Rating],
        total_score: Score,
    ) -> Result<Rating> {
        let input =
            PerformanceRatingInput::new(hole_ratings.to_vec(), total_score).with_search(self.config.search);

        estimate_performance_with_scale(&input, self.config.rd).map(|estimate| estimate.rating)
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: GloConfig =
            serde_json::from_value(config).map_err(|e| GloError::ConfigurationError {
                message: format!("Invalid Glo configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

/// Calculate new player and hole ratings from a single play using the
/// default configuration
pub fn calc_rating_updates(input: &RatingUpdateInput) -> Result<RatingUpdateResult> {
    GloRatingCalculator::default().calc_rating_updates(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::adjustment::MockHoleRatingAdjustment;
    use crate::rating::expected::calc_expected_score;
    use crate::rating::k_factor::calc_player_k_factor;

    #[test]
    fn test_update_matches_formula() {
        let input = RatingUpdateInput::new(1800.0, 1500.0, 0.0).with_performance_rating(1800.0);
        let result = calc_rating_updates(&input).unwrap();

        let expected = calc_expected_score(1500.0, 1800.0);
        let k = calc_player_k_factor(1800.0);

        assert!((result.player_rating - (1800.0 + k * (0.5 - expected))).abs() < 1e-9);
        assert!((result.hole_rating - (1500.0 + 35.0 * (expected - 0.5))).abs() < 1e-9);
    }

    #[test]
    fn test_delta_sign_follows_surprise() {
        let input = RatingUpdateInput::new(1800.0, 1500.0, 0.0).with_performance_rating(1800.0);
        let result = calc_rating_updates(&input).unwrap();

        let actual = to_score(0.0);
        let expected = calc_expected_score(1500.0, 1800.0);
        let delta = result.player_rating - 1800.0;

        // The favourite only made an average score, so it loses rating
        assert!(actual < expected);
        assert_eq!(delta.signum(), (actual - expected).signum());
        assert!(result.hole_rating > 1500.0);
    }

    #[test]
    fn test_good_play_raises_player_and_lowers_hole() {
        let input = RatingUpdateInput::new(1500.0, 1500.0, -2.0).with_performance_rating(1500.0);
        let result = calc_rating_updates(&input).unwrap();

        assert!(result.player_rating > 1500.0);
        assert!(result.hole_rating < 1500.0);
    }

    #[test]
    fn test_missing_performance_rating_pulls_down() {
        let with_perf = RatingUpdateInput::new(1500.0, 1500.0, 0.0).with_performance_rating(1500.0);
        let without_perf = RatingUpdateInput::new(1500.0, 1500.0, 0.0);

        let with_perf = calc_rating_updates(&with_perf).unwrap();
        let without_perf = calc_rating_updates(&without_perf).unwrap();

        // Blended rating of 1200 makes an average play look like an upset win
        assert_eq!(with_perf.player_rating, 1500.0);
        assert!(without_perf.player_rating > with_perf.player_rating);
    }

    #[test]
    fn test_k_factor_uses_unblended_rating() {
        let input = RatingUpdateInput::new(1000.0, 1500.0, -1.0).with_performance_rating(2500.0);
        let result = calc_rating_updates(&input).unwrap();

        let blended = 1000.0 + 0.2 * (2500.0 - 1000.0);
        let expected = calc_expected_score(1500.0, blended);
        let actual = to_score(-1.0);

        let k = (result.player_rating - 1000.0) / (actual - expected);
        assert!((k - calc_player_k_factor(1000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_update_is_pure() {
        let calculator = GloRatingCalculator::default();
        let input = RatingUpdateInput::new(1742.5, 1613.25, 0.75).with_performance_rating(1690.0);

        let first = calculator.calc_rating_updates(&input).unwrap();
        let second = calculator.calc_rating_updates(&input).unwrap();

        assert_eq!(first.player_rating.to_bits(), second.player_rating.to_bits());
        assert_eq!(first.hole_rating.to_bits(), second.hole_rating.to_bits());
    }

    #[test]
    fn test_rejects_non_finite_input() {
        let inputs = [
            RatingUpdateInput::new(f64::NAN, 1500.0, 0.0),
            RatingUpdateInput::new(1500.0, f64::INFINITY, 0.0),
            RatingUpdateInput::new(1500.0, 1500.0, f64::NEG_INFINITY),
            RatingUpdateInput::new(1500.0, 1500.0, 0.0).with_performance_rating(f64::NAN),
        ];

        for input in inputs {
            let err = calc_rating_updates(&input).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<GloError>(),
                Some(GloError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_adjustment_hook_is_consulted() {
        let mut adjustment = MockHoleRatingAdjustment::new();
        adjustment
            .expect_adjust()
            .withf(|rating, details| *rating == 1500.0 && details.to_vec() == vec![2.0])
            .times(1)
            .returning(|rating, _| rating + 360.0);

        let calculator = GloRatingCalculator::default().with_adjustment(adjustment);
        let input = RatingUpdateInput::new(1500.0, 1500.0, 0.0).with_performance_rating(1500.0);
        let result = calculator
            .calc_rating_updates_with_details(&input, &[2.0])
            .unwrap();

        // Harder hole: expected score 1/11, so an average play beats expectation
        let expected = 1.0 / 11.0;
        let k = calc_player_k_factor(1500.0);
        assert!((result.player_rating - (1500.0 + k * (0.5 - expected))).abs() < 1e-9);
        // The hole update starts from the unadjusted rating
        assert!((result.hole_rating - (1500.0 + 35.0 * (expected - 0.5))).abs() < 1e-9);
    }

    #[test]
    fn test_custom_config() {
        let config = GloConfig {
            k_hole: 70.0,
            ..GloConfig::default()
        };
        let calculator = GloRatingCalculator::new(config).unwrap();
        let default = GloRatingCalculator::default();

        let input = RatingUpdateInput::new(1500.0, 1500.0, 1.0).with_performance_rating(1500.0);
        let doubled = calculator.calc_rating_updates(&input).unwrap();
        let single = default.calc_rating_updates(&input).unwrap();

        let doubled_delta = doubled.hole_rating - 1500.0;
        let single_delta = single.hole_rating - 1500.0;
        assert!((doubled_delta - 2.0 * single_delta).abs() < 1e-9);
        assert_eq!(doubled.player_rating, single.player_rating);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GloConfig {
            rd: 0.0,
            ..GloConfig::default()
        };
        assert!(GloRatingCalculator::new(config).is_err());
    }

    #[test]
    fn test_config_round_trip_through_json() {
        let mut calculator = GloRatingCalculator::default();

        let mut json = calculator.config();
        assert_eq!(json["k_hole"], 35.0);

        json["k_hole"] = serde_json::json!(20.0);
        calculator.update_config(json).unwrap();
        assert_eq!(calculator.glo_config().k_hole, 20.0);

        let bad = serde_json::json!({ "k_hole": -1.0 });
        assert!(calculator.update_config(bad).is_err());
        assert_eq!(calculator.glo_config().k_hole, 20.0);

        let malformed = serde_json::json!({ "k_hole": "fast" });
        assert!(calculator.update_config(malformed).is_err());
    }

    #[test]
    fn test_calculator_performance_rating_uses_config() {
        let calculator = GloRatingCalculator::default();
        let rating = calculator
            .calc_performance_rating(&[1500.0, 1500.0, 1500.0], 1.5)
            .unwrap();
        assert_eq!(rating, 1500.0);

        assert!(calculator.calc_performance_rating(&[], 1.0).is_err());
    }
}
