//! Integration tests for the line capacity planner.
//!
//! This test suite drives the HTTP router end to end and covers:
//! - Catalog and shift reference data
//! - Cadence simulation, defaults and absence states
//! - Line capacity projection from a star model
//! - Support area staffing
//! - Plausibility warnings
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use line_planner::api::{AppState, create_router};
use line_planner::config::ConfigLoader;
use line_planner::logging;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    logging::init_test();
    let config = ConfigLoader::load("./config/plant").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn field(value: &Value) -> Decimal {
    match value {
        Value::String(s) => decimal(s),
        other => panic!("Expected decimal string, got {}", other),
    }
}

fn assert_field_approx(value: &Value, expected: &str) {
    let actual = field(value);
    let expected = decimal(expected);
    assert!(
        (actual - expected).abs() < decimal("0.000001"),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(create_router_for_test(), request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(create_router_for_test(), request).await
}

fn warning_codes(body: &Value) -> Vec<String> {
    body["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Reference data
// =============================================================================

#[tokio::test]
async fn test_list_all_models() {
    let (status, body) = get("/models").await;

    assert_eq!(status, StatusCode::OK);
    let models = body.as_array().unwrap();
    assert_eq!(models.len(), 7);
    assert_eq!(models[0]["id"], "pulsar-ns200");
    assert_eq!(models[0]["line"], "L1 CTG");
}

#[tokio::test]
async fn test_list_models_for_one_line() {
    let (status, body) = get("/models?line=L2%20CTG").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["boxer-ct100", "discover-125", "platino-110"]);
}

#[tokio::test]
async fn test_shift_reports_available_time() {
    let (status, body) = get("/shift").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shift"]["start_time"], "06:00");
    assert_eq!(body["shift"]["end_time"], "14:00");
    assert_eq!(body["available_minutes"], 430);
    assert_field_approx(&body["available_hours"], "7.1666667");
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

// =============================================================================
// Cadence simulation
// =============================================================================

#[tokio::test]
async fn test_simulate_explicit_inputs() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "duke-200",
            "current_personnel": 1,
            "target_cadence": 12
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    // 12 M/h * 5.0 min / 60
    assert_field_approx(&result["required_personnel"], "1");
    assert_field_approx(&result["takt_time"], "300");
    assert_field_approx(&result["new_work_content"], "5.0");
    assert_field_approx(&result["personnel_delta"], "0");
    // 12 M/h * 430 min / 60
    assert_field_approx(&result["daily_output"], "86");
    assert_field_approx(&result["monthly_output"], "2064");
}

#[tokio::test]
async fn test_simulate_comparison_and_recommendation() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "dominar-400",
            "current_personnel": "0.5",
            "target_cadence": 15
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 15 * 4.2 / 60 = 1.05
    assert_field_approx(&body["result"]["required_personnel"], "1.05");
    assert_field_approx(&body["result"]["personnel_delta"], "0.55");

    // 60 * 0.5 / 4.2
    assert_field_approx(&body["comparison"]["current"]["cadence"], "7.1428571");
    assert_field_approx(&body["comparison"]["simulated"]["personnel"], "1.05");

    assert_eq!(body["recommendation"]["headcount"], 2);
    assert_eq!(body["recommendation"]["action"], "hire");
    assert_eq!(body["recommendation"]["additional"], 1);
}

#[tokio::test]
async fn test_simulate_surplus_crew() {
    let (_, body) = post(
        "/simulate",
        json!({
            "model_id": "boxer-ct100",
            "target_cadence": 40
        }),
    )
    .await;

    // 40 * 1.8 / 60 = 1.2 against the default crew of 20
    assert_field_approx(&body["result"]["personnel_delta"], "-18.8");
    assert_eq!(body["recommendation"]["action"], "surplus");
    assert_eq!(body["recommendation"]["excess"], 19);
}

#[tokio::test]
async fn test_simulate_zero_cadence_has_no_result() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "pulsar-ns200",
            "current_personnel": 20,
            "target_cadence": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].is_null());
    assert!(body["comparison"].is_null());
    assert!(body["recommendation"].is_null());
}

#[tokio::test]
async fn test_simulate_zero_crew_has_no_result() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "pulsar-ns200",
            "current_personnel": 0,
            "target_cadence": 25
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn test_simulate_overflowing_cadence_has_no_result() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "pulsar-ns200",
            "target_cadence": "1000000000000000000000000000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].is_null());
    assert!(body["recommendation"].is_null());
    // Headcount alone still fits: 1e27 * 2.5 / 60
    assert!(!body["comparison"].is_null());
}

#[tokio::test]
async fn test_simulate_with_overnight_shift_override() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "pulsar-ns200",
            "target_cadence": 24,
            "shift": {
                "start_time": "22:00",
                "end_time": "06:00",
                "breaks": { "am": 0, "lunch": 0, "pm": 0 },
                "working_days_per_month": 20
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available_minutes"], 480);
    // 24 M/h over 8 h, 20 days
    assert_field_approx(&body["result"]["daily_output"], "192");
    assert_field_approx(&body["result"]["monthly_output"], "3840");
}

#[tokio::test]
async fn test_simulate_flags_cadence_above_historical_max() {
    let (_, body) = post(
        "/simulate",
        json!({
            "model_id": "duke-200",
            "target_cadence": 22
        }),
    )
    .await;

    assert!(!body["result"].is_null());
    assert_eq!(warning_codes(&body), vec!["ABOVE_HISTORICAL_MAX_CADENCE"]);
}

#[tokio::test]
async fn test_simulate_flags_negative_available_time_but_keeps_figures() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "pulsar-ns200",
            "target_cadence": 30,
            "shift": {
                "start_time": "08:00",
                "end_time": "09:00",
                "breaks": { "am": 30, "lunch": 60, "pm": 30 }
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available_minutes"], -60);
    assert_field_approx(&body["result"]["daily_output"], "-30");
    // Default 24 working days
    assert_field_approx(&body["result"]["monthly_output"], "-720");
    assert_eq!(warning_codes(&body), vec!["NEGATIVE_AVAILABLE_TIME"]);
}

// =============================================================================
// Capacity projection
// =============================================================================

#[tokio::test]
async fn test_capacity_projection_for_line() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L1 CTG",
            "star_model_id": "pulsar-ns200",
            "target_cadence": 30
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_field_approx(&body["fixed_personnel"], "1.25");

    let rows = body["rows"].as_array().unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r["model_id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec!["pulsar-ns200", "dominar-400", "pulsar-n160", "duke-200"]
    );

    assert!(rows[0]["is_star"].as_bool().unwrap());
    assert_eq!(field(&rows[0]["projected_cadence"]), decimal("30"));

    // 60 * 1.25 / 5.0
    assert!(!rows[3]["is_star"].as_bool().unwrap());
    assert_field_approx(&rows[3]["projected_cadence"], "15");
    // 15 M/h * 430 / 60 * 24
    assert_field_approx(&rows[3]["monthly_output"], "2580");
}

#[tokio::test]
async fn test_capacity_without_star_is_empty() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L2 CTG",
            "star_model_id": "",
            "target_cadence": 30
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["rows"].as_array().unwrap().is_empty());
    assert!(body["fixed_personnel"].is_null());
}

#[tokio::test]
async fn test_capacity_without_cadence_is_empty() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L2 CTG",
            "star_model_id": "boxer-ct100"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_capacity_rejects_star_from_other_line() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L1 CTG",
            "star_model_id": "boxer-ct100",
            "target_cadence": "40"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "STAR_MODEL_OFF_LINE");
    assert!(body["message"].as_str().unwrap().contains("L1 CTG"));
}

#[tokio::test]
async fn test_capacity_star_row_reproduces_target_on_second_line() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L2 CTG",
            "star_model_id": "boxer-ct100",
            "target_cadence": "40"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    let star_rows: Vec<&Value> = rows.iter().filter(|r| r["is_star"] == true).collect();
    assert_eq!(star_rows.len(), 1);
    assert_eq!(field(&star_rows[0]["projected_cadence"]), decimal("40"));
}

#[tokio::test]
async fn test_capacity_overflowing_cadence_is_empty() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L1 CTG",
            "star_model_id": "pulsar-ns200",
            "target_cadence": "1000000000000000000000000000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_capacity_unknown_star_returns_404() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L1 CTG",
            "star_model_id": "ghost",
            "target_cadence": 30
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "MODEL_NOT_FOUND");
}

#[tokio::test]
async fn test_capacity_unknown_line_is_rejected() {
    let (status, body) = post(
        "/capacity",
        json!({
            "line": "L9 CTG",
            "star_model_id": "pulsar-ns200",
            "target_cadence": 30
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Support area staffing
// =============================================================================

#[tokio::test]
async fn test_support_staffing_growth() {
    let (status, body) = post(
        "/support-staffing",
        json!({
            "area": "quality_process",
            "current_line_staff": 40,
            "target_line_staff": 60,
            "current_area_staff": 5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["area"], "quality_process");
    assert_field_approx(&body["result"]["factor"], "1.5");
    assert_field_approx(&body["result"]["exact"], "7.5");
    assert_eq!(body["result"]["required"], 8);
    assert_eq!(body["result"]["delta"], 3);
}

#[tokio::test]
async fn test_support_staffing_shrink() {
    let (_, body) = post(
        "/support-staffing",
        json!({
            "current_line_staff": 60,
            "target_line_staff": 45,
            "current_area_staff": 7
        }),
    )
    .await;

    // 7 * 45 / 60 = 5.25
    assert!(body["area"].is_null());
    assert_eq!(body["result"]["required"], 6);
    assert_eq!(body["result"]["delta"], -1);
}

#[tokio::test]
async fn test_support_staffing_missing_input_has_no_result() {
    let (status, body) = post(
        "/support-staffing",
        json!({
            "area": "supply",
            "current_line_staff": 40,
            "target_line_staff": 60
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].is_null());
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/simulate")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"model_id\": "))
        .unwrap();

    let (status, body) = send(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/support-staffing")
        .body(Body::from("{}"))
        .unwrap();

    let (status, body) = send(create_router_for_test(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_error_invalid_shift_time() {
    let (status, body) = post(
        "/simulate",
        json!({
            "model_id": "pulsar-ns200",
            "shift": {
                "start_time": "6am",
                "end_time": "14:00",
                "breaks": { "am": 10, "lunch": 30, "pm": 10 }
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
    assert!(body["message"].as_str().unwrap().contains("HH:mm"));
}
