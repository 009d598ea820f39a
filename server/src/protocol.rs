//! Wire types for the JSON API and the HTML form.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::error::{RatingError, Result};
use crate::rating::{LogisticParams, MatchInput, ModelKind, NormalCdfParams, ScoreOutcome};

// ---------- JSON API ----------

/// Body of `POST /api/calculate`. Numbers may also arrive as strings.
#[serde_as]
#[derive(Debug, Deserialize, Default)]
pub struct CalculateRequest {
    #[serde(default)]
    pub team1: String,
    #[serde(default)]
    pub team2: String,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating1: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub rating2: Option<f64>,
    /// Falls back to the configured default weight.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub weight: Option<i64>,
    #[serde(default)]
    pub model: Option<ModelKind>,
}

impl CalculateRequest {
    pub fn into_input(self, default_weight: u32) -> Result<MatchInput> {
        let rating1 = self.rating1.ok_or_else(|| missing("rating1"))?;
        let rating2 = self.rating2.ok_or_else(|| missing("rating2"))?;
        let weight = self.weight.unwrap_or_else(|| i64::from(default_weight));
        MatchInput::new(&self.team1, &self.team2, rating1, rating2, weight)
    }
}

fn missing(field: &str) -> RatingError {
    RatingError::InvalidInput(format!("{field} is required"))
}

/// Body of `GET /api/models`.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub default_model: ModelKind,
    pub default_weight: u32,
    pub outcomes: &'static [ScoreOutcome],
    pub logistic: LogisticParams,
    pub normal_cdf: NormalCdfParams,
    /// Divisor applied to `(SSV - EMR) * weight` by the normal-CDF model.
    pub normal_delta_divisor: f64,
}

// ---------- HTML form ----------

/// Raw fields posted by the form; parsed by [`MatchInput::parse`].
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FormSubmission {
    #[serde(default)]
    pub team1: String,
    #[serde(default)]
    pub team2: String,
    #[serde(default)]
    pub team1_point: String,
    #[serde(default)]
    pub team2_point: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub model: String,
}

impl FormSubmission {
    pub fn to_input(&self) -> Result<MatchInput> {
        MatchInput::parse(
            &self.team1,
            &self.team2,
            &self.team1_point,
            &self.team2_point,
            &self.weight,
        )
    }

    /// Selected model, or `fallback` when the field is blank.
    pub fn model_kind(&self, fallback: ModelKind) -> Result<ModelKind> {
        if self.model.trim().is_empty() {
            Ok(fallback)
        } else {
            self.model.parse()
        }
    }
}
