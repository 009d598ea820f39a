use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RatingError;

/// Standard cutoff z-values, worst team1 result first.
pub const DEFAULT_CUTOFFS: [f64; 5] = [-1.060, -0.394, 0.0, 0.394, 1.060];

/// Which expected-result model to use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    #[serde(alias = "elo")]
    Logistic,
    #[serde(alias = "normal")]
    NormalCdf,
}

impl ModelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Logistic => "logistic",
            ModelKind::NormalCdf => "normal_cdf",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistic" | "elo" => Ok(ModelKind::Logistic),
            "normal_cdf" | "normal" => Ok(ModelKind::NormalCdf),
            other => Err(RatingError::InvalidInput(format!("unknown model {other:?}"))),
        }
    }
}

/// Elo-style expected score with base-10 logistic curve.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct LogisticParams {
    /// Rating gap that multiplies the odds by ten.
    pub scale: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        LogisticParams { scale: 100.0 }
    }
}

/// Set-score probabilities drawn from a normal distribution.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct NormalCdfParams {
    /// Rating gap worth one standard deviation.
    pub divisor: f64,
    /// Strictly increasing z-values splitting the six outcomes.
    pub cutoffs: [f64; 5],
    /// Smallest magnitude a win or loss may move a rating.
    pub min_delta: f64,
}

impl Default for NormalCdfParams {
    fn default() -> Self {
        NormalCdfParams {
            divisor: 100.0,
            cutoffs: DEFAULT_CUTOFFS,
            min_delta: 0.01,
        }
    }
}

/// A fully parameterised model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    Logistic(LogisticParams),
    NormalCdf(NormalCdfParams),
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Logistic(_) => ModelKind::Logistic,
            Model::NormalCdf(_) => ModelKind::NormalCdf,
        }
    }

    /// Decimal places used for deltas and new ratings.
    pub fn precision(&self) -> i32 {
        match self {
            Model::Logistic(_) => 2,
            Model::NormalCdf(_) => 3,
        }
    }
}

impl From<ModelKind> for Model {
    fn from(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Logistic => Model::Logistic(LogisticParams::default()),
            ModelKind::NormalCdf => Model::NormalCdf(NormalCdfParams::default()),
        }
    }
}
