//! Dynamic player K-factor
//!
//! Lower rated players are treated as less established and move faster.
//! The curve is a hyperbola that settles at the default K-factor once the
//! player reaches the threshold rating.

use crate::config::rating::KFactorConfig;
use crate::types::Rating;

/// K-factor for a player using the default curve, always at least 12
pub fn calc_player_k_factor(player_rating: Rating) -> f64 {
    calc_player_k_factor_with(player_rating, &KFactorConfig::default())
}

/// K-factor for a player using an explicit curve
pub fn calc_player_k_factor_with(player_rating: Rating, config: &KFactorConfig) -> f64 {
    if player_rating < config.threshold {
        let distance = config.threshold - player_rating;
        return config.scale * (config.base_variance + distance.powi(2) / config.spread).sqrt();
    }

    config.default
}
