use serde::Serialize;

use crate::error::{RatingError, Result};

/// Validated request for one calculation.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MatchInput {
    pub team1: String,
    pub team2: String,
    pub rating1: f64,
    pub rating2: f64,
    pub weight: u32,
}

impl MatchInput {
    /// Normalizes team names and checks every numeric invariant.
    pub fn new(
        team1: &str,
        team2: &str,
        rating1: f64,
        rating2: f64,
        weight: i64,
    ) -> Result<Self> {
        let team1 = normalize_team("team1", team1)?;
        let team2 = normalize_team("team2", team2)?;
        let rating1 = check_rating("rating1", rating1)?;
        let rating2 = check_rating("rating2", rating2)?;
        let weight = check_weight(weight)?;

        Ok(MatchInput {
            team1,
            team2,
            rating1,
            rating2,
            weight,
        })
    }

    /// Builds an input from raw form strings.
    pub fn parse(
        team1: &str,
        team2: &str,
        rating1: &str,
        rating2: &str,
        weight: &str,
    ) -> Result<Self> {
        let rating1 = parse_number::<f64>("rating1", rating1)?;
        let rating2 = parse_number::<f64>("rating2", rating2)?;
        let weight = parse_number::<i64>("weight", weight)?;
        MatchInput::new(team1, team2, rating1, rating2, weight)
    }
}

/// Team names are compared case-insensitively, so store them upper-cased.
pub fn normalize_team(field: &str, raw: &str) -> Result<String> {
    let name = raw.trim().to_uppercase();
    if name.is_empty() {
        return Err(RatingError::InvalidTeamName(format!(
            "{field} must not be empty"
        )));
    }
    Ok(name)
}

pub fn check_rating(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(RatingError::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(value)
}

pub fn check_weight(value: i64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(w) if w > 0 => Ok(w),
        _ => Err(RatingError::InvalidInput(format!(
            "weight must be a positive integer, got {value}"
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RatingError::InvalidInput(format!("{field} is required")));
    }
    raw.parse::<T>()
        .map_err(|_| RatingError::InvalidInput(format!("{field} is not a number: {raw:?}")))
}
