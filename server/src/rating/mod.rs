//! Rating-delta calculation for a single best-of-five match.

pub mod calculator;
pub mod input;
pub mod logistic;
pub mod model;
pub mod normal;
pub mod outcome;

pub use calculator::{compute, compute_match, DeltaResult, Expected, MatchReport};
pub use input::MatchInput;
pub use model::{LogisticParams, Model, ModelKind, NormalCdfParams};
pub use outcome::{ScoreOutcome, OUTCOMES};
