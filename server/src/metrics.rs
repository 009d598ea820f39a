//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Global Prometheus handle reused in tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Calculations served, by model and `ok` / error code.
pub static CALCULATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new("rating_calculations_total", "Rating calculations served"),
        &["model", "outcome"],
    )
    .expect("counter opts");
    if let Err(e) = METRICS.registry.register(Box::new(counter.clone())) {
        log::warn!("calculation counter not registered: {e}");
    }
    counter
});

/// Bumps [`CALCULATIONS`] for one finished request.
pub fn record_calculation(model: &str, outcome: &str) {
    CALCULATIONS.with_label_values(&[model, outcome]).inc();
}
