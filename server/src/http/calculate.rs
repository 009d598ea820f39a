//! JSON rating calculator.

use actix_web::{get, post, web, HttpResponse};

use crate::config::settings;
use crate::error::Result;
use crate::metrics::record_calculation;
use crate::protocol::{CalculateRequest, ModelsResponse};
use crate::rating::{compute_match, normal, MatchInput, MatchReport, ModelKind, OUTCOMES};

/// Runs one calculation and records how it went.
pub fn run(input: Result<MatchInput>, kind: ModelKind) -> Result<MatchReport> {
    match input {
        Ok(input) => {
            let report = compute_match(&input, &settings().model(kind));
            log::debug!(
                "{} vs {} ({} / {}, weight {}) via {kind}",
                input.team1,
                input.team2,
                input.rating1,
                input.rating2,
                input.weight
            );
            record_calculation(kind.as_str(), "ok");
            Ok(report)
        }
        Err(e) => {
            log::warn!("rejected calculation: {e}");
            record_calculation(kind.as_str(), e.code());
            Err(e)
        }
    }
}

/// POST /api/calculate
#[post("/calculate")]
pub async fn calculate(body: web::Json<CalculateRequest>) -> Result<HttpResponse> {
    let s = settings();
    let req = body.into_inner();
    let kind = req.model.unwrap_or(s.default_model);
    let report = run(req.into_input(s.default_weight), kind)?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/models
#[get("/models")]
pub async fn models() -> HttpResponse {
    let s = settings();
    HttpResponse::Ok().json(ModelsResponse {
        default_model: s.default_model,
        default_weight: s.default_weight,
        outcomes: &OUTCOMES,
        logistic: s.logistic,
        normal_cdf: s.normal,
        normal_delta_divisor: normal::DELTA_DIVISOR,
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(calculate).service(models);
}
