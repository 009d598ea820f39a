//! Set-score probabilities from a normal distribution over the rating gap.
//!
//! The five cutoffs split the real line into six intervals, one per
//! [`OUTCOMES`] entry. Shifting the cutoffs by the scaled rating gap moves
//! probability mass towards the stronger team's results.

use std::f64::consts::SQRT_2;

use super::model::NormalCdfParams;
use super::outcome::{ScoreOutcome, OUTCOMES};

/// SSV-weighted delta is divided by this before applying the match weight.
pub const DELTA_DIVISOR: f64 = 8.0;

/// Smallest delta still visible at three decimals.
pub const MIN_STEP: f64 = 0.001;

/// Error function, Abramowitz & Stegun 7.1.26 (|error| < 1.5e-7).
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Cumulative distribution of the standard normal.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Probability of each outcome, in [`OUTCOMES`] order.
pub fn outcome_probabilities(rating1: f64, rating2: f64, params: &NormalCdfParams) -> [f64; 6] {
    let gap = (rating1 - rating2) / params.divisor;

    // Worst team1 result first.
    let mut worst_first = [0.0; 6];
    let mut below = 0.0;
    for (slot, cutoff) in worst_first.iter_mut().zip(params.cutoffs) {
        let cumulative = standard_normal_cdf(cutoff - gap);
        *slot = cumulative - below;
        below = cumulative;
    }
    worst_first[5] = 1.0 - below;

    let mut probs = [0.0; 6];
    for (i, p) in probs.iter_mut().enumerate() {
        *p = worst_first[5 - i];
    }
    probs
}

/// Expected match result (EMR): probability-weighted set-score value.
pub fn expected_match_result(probs: &[f64; 6]) -> f64 {
    probs
        .iter()
        .zip(OUTCOMES.iter())
        .map(|(p, o)| p * o.set_score_value)
        .sum()
}

/// Unrounded team1 delta for `outcome`.
pub fn raw_delta(outcome: &ScoreOutcome, emr: f64, weight: u32) -> f64 {
    (outcome.set_score_value - emr) * f64::from(weight) / DELTA_DIVISOR
}

/// Keeps a rounded win above `+min_delta` and a rounded loss below `-min_delta`.
/// The floor never drops under [`MIN_STEP`], so signed outcomes are never zero.
pub fn floor_delta(outcome: &ScoreOutcome, delta: f64, params: &NormalCdfParams) -> f64 {
    let floor = params.min_delta.max(MIN_STEP);
    if outcome.set_score_value > 0.0 {
        delta.max(floor)
    } else if outcome.set_score_value < 0.0 {
        delta.min(-floor)
    } else {
        delta
    }
}
