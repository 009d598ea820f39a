//! End-to-end checks of the JSON API, the form and the metrics endpoint.

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};
use setpoint_server::{http::routes::init_routes, metrics::METRICS};

macro_rules! app {
    () => {
        test::init_service(App::new().wrap(METRICS.clone()).configure(init_routes)).await
    };
}

#[actix_rt::test]
async fn calculate_returns_all_outcomes() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({
            "team1": "jpn",
            "team2": "pol",
            "rating1": 1000,
            "rating2": "1000",
            "weight": 40,
            "model": "logistic"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["team1"], "JPN");
    assert_eq!(body["team2"], "POL");
    assert_eq!(body["model"], "logistic");
    assert_eq!(body["expected"]["team1"], 0.5);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 6);
    assert_eq!(results[0]["score"], "3-0");
    assert_eq!(results[0]["team1_delta"], 20.0);
    assert_eq!(results[0]["team2_delta"], -20.0);
    assert!(results[0].get("probability").is_none());
    assert!(body.get("computed_at").is_none());
}

#[actix_rt::test]
async fn api_accepts_model_aliases() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({
            "team1": "a", "team2": "b",
            "rating1": 1000, "rating2": 1000,
            "weight": 50, "model": "normal"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["model"], "normal_cdf");
}

#[actix_rt::test]
async fn normal_model_reports_probabilities() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({
            "team1": "a", "team2": "b",
            "rating1": 1000, "rating2": 1000,
            "weight": 50, "model": "normal_cdf"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["team1_delta"], 12.5);
    assert!(results.iter().all(|r| r["probability"].is_number()));
}

#[actix_rt::test]
async fn empty_team_name_is_rejected() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({ "team1": "  ", "team2": "b", "rating1": 1, "rating2": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_team_name");
    assert_eq!(body["results"], json!([]));
}

#[actix_rt::test]
async fn non_numeric_rating_is_invalid_input() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({ "team1": "a", "team2": "b", "rating1": "high", "rating2": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
}

#[actix_rt::test]
async fn zero_weight_is_invalid_input() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({ "team1": "a", "team2": "b", "rating1": 1, "rating2": 2, "weight": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
    assert!(body["message"].as_str().unwrap().contains("weight"));
}

#[actix_rt::test]
async fn models_lists_constants() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/models").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["outcomes"].as_array().unwrap().len(), 6);
    assert_eq!(body["outcomes"][0]["set_score_value"], 2.0);
    assert_eq!(body["normal_cdf"]["cutoffs"].as_array().unwrap().len(), 5);
    assert_eq!(body["normal_delta_divisor"], 8.0);
}

#[actix_rt::test]
async fn healthz_is_ok() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/healthz").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, actix_web::web::Bytes::from_static(b"ok"));
}

#[actix_rt::test]
async fn form_page_has_defaults() {
    let app = app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let page = std::str::from_utf8(&body).unwrap();
    assert!(page.contains("name=\"team1_point\""));
    assert!(page.contains("<option value=\"normal_cdf\""));
    assert!(!page.contains("<table>"));
}

#[actix_rt::test]
async fn form_submission_renders_table() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/")
        .set_form([
            ("team1", "jpn"),
            ("team2", "<ita>"),
            ("team1_point", "1000"),
            ("team2_point", "1000"),
            ("weight", "40"),
            ("model", "logistic"),
        ])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("<table>"));
    assert!(page.contains("value=\"JPN\""));
    assert!(page.contains("&lt;ITA&gt;"));
    assert!(page.contains("<td>3-0</td><td>20</td><td>-20</td><td>1020</td><td>980</td>"));
}

#[actix_rt::test]
async fn form_error_keeps_values() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/")
        .set_form([
            ("team1", "jpn"),
            ("team2", "ita"),
            ("team1_point", "lots"),
            ("team2_point", "1000"),
            ("weight", "40"),
        ])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Input error"));
    assert!(page.contains("value=\"lots\""));
    assert!(!page.contains("<table>"));
}

#[actix_rt::test]
async fn form_error_keeps_selected_model() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/")
        .set_form([
            ("team1", "jpn"),
            ("team2", "ita"),
            ("team1_point", "lots"),
            ("team2_point", "1000"),
            ("weight", "40"),
            ("model", "normal_cdf"),
        ])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Input error"));
    assert!(page.contains("<option value=\"normal_cdf\" selected>"));
    assert!(!page.contains("<option value=\"logistic\" selected>"));
}

#[actix_rt::test]
async fn metrics_count_calculations() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/calculate")
        .set_json(json!({ "team1": "a", "team2": "b", "rating1": 1, "rating2": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("rating_calculations_total"));
}
