//! Default constants of the Glo rating system

/// Fixed K-factor applied to hole rating updates
pub const K_HOLE: f64 = 35.0;

/// K-factor for established players (rating at or above the threshold)
pub const K_PLAYER_DEFAULT: f64 = 12.0;

/// Weight of the round's performance rating in the blended player rating
pub const R_WEIGHT: f64 = 0.2;

/// Rating difference scale of the expected score model
pub const RD: f64 = 360.0;

/// Player rating at which the K-factor settles at `K_PLAYER_DEFAULT`
pub const K_FACTOR_THRESHOLD: f64 = 1900.0;

pub const K_FACTOR_SCALE: f64 = 16.0;
pub const K_FACTOR_BASE_VARIANCE: f64 = 0.5625;
pub const K_FACTOR_SPREAD: f64 = 250_000.0;

/// Default lower bound of the performance rating search
pub const SEARCH_MIN_RETURN: f64 = 0.0;

/// Default upper bound of the performance rating search
pub const SEARCH_MAX_RETURN: f64 = 3000.0;

/// Default number of bisection rounds of the performance rating search
pub const SEARCH_ITERATIONS: u32 = 8;
