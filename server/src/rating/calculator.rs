//! Per-outcome rating deltas for both teams.

use serde::Serialize;

use super::input::{check_rating, check_weight, MatchInput};
use super::model::{Model, ModelKind};
use super::outcome::OUTCOMES;
use super::{logistic, normal};
use crate::error::Result;

/// Decimal places for probabilities and expected values.
const PROBABILITY_PRECISION: i32 = 4;

/// What one outcome would do to both ratings.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DeltaResult {
    pub score: &'static str,
    pub team1_delta: f64,
    pub team2_delta: f64,
    pub team1_new: f64,
    pub team2_new: f64,
    /// Only the normal-CDF model assigns outcome probabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

/// Expected score (logistic) or expected match result (normal-CDF) per team.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Expected {
    pub team1: f64,
    pub team2: f64,
}

/// Full answer for one validated [`MatchInput`].
#[derive(Debug, Serialize, Clone)]
pub struct MatchReport {
    #[serde(flatten)]
    pub input: MatchInput,
    pub model: ModelKind,
    pub expected: Expected,
    pub results: Vec<DeltaResult>,
}

/// Rounds half away from zero and never returns `-0.0`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    // Magnitudes this large carry no fractional digits.
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Deltas for every outcome. Validates the raw numbers first.
pub fn compute(
    rating1: f64,
    rating2: f64,
    weight: i64,
    model: &Model,
) -> Result<Vec<DeltaResult>> {
    let rating1 = check_rating("rating1", rating1)?;
    let rating2 = check_rating("rating2", rating2)?;
    let weight = check_weight(weight)?;
    Ok(evaluate(rating1, rating2, weight, model).1)
}

/// Deltas plus expectations for an already validated input.
pub fn compute_match(input: &MatchInput, model: &Model) -> MatchReport {
    let (expected, results) = evaluate(input.rating1, input.rating2, input.weight, model);
    MatchReport {
        input: input.clone(),
        model: model.kind(),
        expected,
        results,
    }
}

fn evaluate(
    rating1: f64,
    rating2: f64,
    weight: u32,
    model: &Model,
) -> (Expected, Vec<DeltaResult>) {
    let places = model.precision();

    let row = |score: &'static str, raw: f64, probability: Option<f64>| {
        let team1_delta = round_to(raw, places);
        // Negate after rounding so the pair always cancels exactly.
        let team2_delta = round_to(-team1_delta, places);
        DeltaResult {
            score,
            team1_delta,
            team2_delta,
            team1_new: round_to(rating1 + team1_delta, places),
            team2_new: round_to(rating2 + team2_delta, places),
            probability,
        }
    };

    match model {
        Model::Logistic(params) => {
            let e1 = logistic::expected_score(rating1, rating2, params);
            let results: Vec<DeltaResult> = OUTCOMES
                .iter()
                .map(|o| row(o.score, logistic::raw_delta(weight, o.actual(), e1), None))
                .collect();
            let expected = Expected {
                team1: round_to(e1, PROBABILITY_PRECISION),
                team2: round_to(1.0 - e1, PROBABILITY_PRECISION),
            };
            (expected, results)
        }
        Model::NormalCdf(params) => {
            let probs = normal::outcome_probabilities(rating1, rating2, params);
            let emr = normal::expected_match_result(&probs);
            let results: Vec<DeltaResult> = OUTCOMES
                .iter()
                .zip(probs)
                .map(|(o, p)| {
                    let raw = round_to(normal::raw_delta(o, emr, weight), places);
                    let floored = normal::floor_delta(o, raw, params);
                    row(o.score, floored, Some(round_to(p, PROBABILITY_PRECISION)))
                })
                .collect();
            let expected = Expected {
                team1: round_to(emr, PROBABILITY_PRECISION),
                team2: round_to(-emr, PROBABILITY_PRECISION),
            };
            (expected, results)
        }
    }
}
