//! Elo-style logistic expectation.

use super::model::LogisticParams;

/// Expected score of the first team, in `[0, 1]`.
pub fn expected_score(rating1: f64, rating2: f64, params: &LogisticParams) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating2 - rating1) / params.scale))
}

/// Unrounded rating change for a team that expected `expected` and scored `actual`.
pub fn raw_delta(weight: u32, actual: f64, expected: f64) -> f64 {
    f64::from(weight) * (actual - expected)
}
