//! Error types shared by the calculator and the HTTP layer.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RatingError>;

/// Validation failures raised before any rating math runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    /// Missing, non-numeric or out-of-range rating / weight.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Team name empty once trimmed.
    #[error("invalid team name: {0}")]
    InvalidTeamName(String),
}

impl RatingError {
    /// Stable machine-readable code, also used as a metrics label.
    pub fn code(&self) -> &'static str {
        match self {
            RatingError::InvalidInput(_) => "invalid_input",
            RatingError::InvalidTeamName(_) => "invalid_team_name",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    results: Vec<()>,
}

impl ResponseError for RatingError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.code(),
            message: self.to_string(),
            results: Vec::new(),
        })
    }
}
