use actix_web::{middleware::Logger, App, HttpServer};
use setpoint_server::{config, http, metrics};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

    let s = config::settings();
    log::info!(
        "listening on {server_addr} (default model {}, weight {})",
        s.default_model,
        s.default_weight
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
