//! Conversion between strokes and normalized scores

use crate::error::{GloError, Result};
use crate::types::{Score, Strokes};

/// Convert strokes (-inf, inf) to a score in (0, 1).
///
/// Strictly decreasing; zero strokes is an average score of 0.5.
pub fn to_score(strokes: Strokes) -> Score {
    1.0 / (1.0 + 10f64.powf(strokes / 2.0))
}

/// Convert a score in (0, 1) back to strokes.
///
/// Scores at or beyond the interval bounds have no finite strokes value and
/// are rejected with [`GloError::InvalidDomain`].
pub fn to_strokes(score: Score) -> Result<Strokes> {
    if !(score > 0.0 && score < 1.0) {
        return Err(GloError::InvalidDomain {
            operation: "to_strokes".to_string(),
            value: score,
        }
        .into());
    }

    Ok(2.0 * ((1.0 - score) / score).log10())
}

/// Sum of the scores of every play in a round
pub fn total_score(strokes: &[Strokes]) -> Score {
    strokes.iter().copied().map(to_score).sum()
}
