use crate::error::RatingError;
use crate::http;
use actix_web::{error::JsonPayloadError, web, HttpRequest};

/// Malformed JSON bodies become `InvalidInput` so every API error shares one shape.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RatingError::InvalidInput(err.to_string()).into()
}

/// Mount the JSON API under `/api` and the form at `/`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .configure(http::calculate::init_routes)
            .configure(http::health::init_routes),
    )
    .configure(http::form::init_routes);
}
