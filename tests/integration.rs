//! End-to-end tests for the payroll engine HTTP API.
//!
//! The router is driven in-process against `config/payroll.yaml` and the
//! `data/db.json` fixture. Covered here:
//! - Monthly payroll runs (attendance and shift completion)
//! - Inline calculations
//! - Daily pay and workforce reports
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, DataConfig, PayrollConfig, PayrollSettings};
use payroll_engine::models::{OvernightPolicy, TimeSourceKind};
use payroll_engine::repository::JsonFileRepository;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    let repository = JsonFileRepository::new(config.config().data.path.clone());
    create_router(AppState::new(config, Arc::new(repository)))
}

fn create_router_with(time_source: TimeSourceKind, overnight_policy: OvernightPolicy) -> Router {
    let config = ConfigLoader::from_config(PayrollConfig {
        server: Default::default(),
        data: DataConfig {
            path: "./data/db.json".into(),
        },
        payroll: PayrollSettings {
            time_source,
            overnight_policy,
        },
    });
    let repository = JsonFileRepository::new("./data/db.json");
    create_router(AppState::new(config, Arc::new(repository)))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn decimal_field(value: &Value, field: &str) -> Decimal {
    let raw = value[field]
        .as_str()
        .unwrap_or_else(|| panic!("{} should be a decimal string, got {}", field, value[field]));
    decimal(raw)
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));
    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

fn find_row<'a>(report: &'a Value, employee_id: &str) -> &'a Value {
    report["breakdowns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["employee_id"] == employee_id)
        .unwrap_or_else(|| panic!("No row for employee {}", employee_id))
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(create_router_for_test(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// =============================================================================
// Monthly payroll over the store
// =============================================================================

#[tokio::test]
async fn test_payroll_june_attendance() {
    let (status, report) = get_json(create_router_for_test(), "/payroll/2024-06").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(report["period"], "2024-06");
    assert_eq!(report["time_source"], "attendance");
    assert!(report["calculation_id"].is_string());

    // Soft-deleted employee 4 has no row; order follows the store
    let ids: Vec<&str> = report["breakdowns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["employee_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let first = find_row(&report, "1");
    assert_eq!(decimal_field(first, "worked_hours"), decimal("9"));
    assert_eq!(decimal_field(first, "base_pay"), decimal("450000"));
    assert_eq!(decimal_field(first, "bonus_total"), decimal("200000"));
    assert_eq!(decimal_field(first, "penalty_total"), decimal("50000"));
    assert_eq!(decimal_field(first, "net_pay"), decimal("600000"));
}

#[tokio::test]
async fn test_payroll_incomplete_record_counts_zero() {
    let (_, report) = get_json(create_router_for_test(), "/payroll/2024-06").await;

    // 13:00-17:30 counts; 13:00 with no check-out does not
    let second = find_row(&report, "2");
    assert_eq!(decimal_field(second, "worked_hours"), decimal("4.5"));
    assert_eq!(decimal_field(second, "base_pay"), decimal("189000"));
    assert_eq!(decimal_field(second, "net_pay"), decimal("-111000"));
}

#[tokio::test]
async fn test_payroll_overnight_wraps_by_default() {
    let (_, report) = get_json(create_router_for_test(), "/payroll/2024-06").await;

    let third = find_row(&report, "3");
    assert_eq!(decimal_field(third, "worked_hours"), decimal("8"));
    assert_eq!(decimal_field(third, "base_pay"), decimal("480000"));
    // The negative bonus in the store is dropped
    assert_eq!(decimal_field(third, "bonus_total"), Decimal::ZERO);
}

#[tokio::test]
async fn test_payroll_overnight_zero_policy() {
    let router = create_router_with(TimeSourceKind::Attendance, OvernightPolicy::Zero);
    let (_, report) = get_json(router, "/payroll/2024-06").await;

    let third = find_row(&report, "3");
    assert_eq!(decimal_field(third, "worked_hours"), Decimal::ZERO);
    assert_eq!(decimal_field(third, "net_pay"), Decimal::ZERO);
}

#[tokio::test]
async fn test_payroll_totals() {
    let (_, report) = get_json(create_router_for_test(), "/payroll/2024-06").await;
    let totals = &report["totals"];

    assert_eq!(totals["employees"], 3);
    assert_eq!(decimal_field(totals, "worked_hours"), decimal("21.5"));
    assert_eq!(decimal_field(totals, "base_pay"), decimal("1119000"));
    assert_eq!(decimal_field(totals, "bonus_total"), decimal("200000"));
    assert_eq!(decimal_field(totals, "penalty_total"), decimal("350000"));
    assert_eq!(decimal_field(totals, "net_pay"), decimal("969000"));
}

#[tokio::test]
async fn test_payroll_previous_month_is_isolated() {
    let (status, report) = get_json(create_router_for_test(), "/payroll/2024-05").await;
    assert_eq!(status, StatusCode::OK);

    let first = find_row(&report, "1");
    assert_eq!(decimal_field(first, "worked_hours"), decimal("9"));
    assert_eq!(decimal_field(first, "bonus_total"), decimal("999999"));
    assert_eq!(decimal_field(first, "penalty_total"), Decimal::ZERO);

    let second = find_row(&report, "2");
    assert_eq!(decimal_field(second, "net_pay"), Decimal::ZERO);
}

#[tokio::test]
async fn test_payroll_month_without_data_gives_zero_rows() {
    let (_, report) = get_json(create_router_for_test(), "/payroll/2023-01").await;

    for row in report["breakdowns"].as_array().unwrap() {
        assert_eq!(decimal_field(row, "net_pay"), Decimal::ZERO);
        assert_eq!(decimal_field(row, "worked_hours"), Decimal::ZERO);
    }
}

#[tokio::test]
async fn test_payroll_shift_completion_source() {
    let router = create_router_with(TimeSourceKind::ShiftCompletion, OvernightPolicy::default());
    let (status, report) = get_json(router, "/payroll/2024-06").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["time_source"], "shift_completion");

    // 22 days x 1 shift x 400,000
    assert_eq!(
        decimal_field(find_row(&report, "1"), "base_pay"),
        decimal("8800000")
    );
    // Undated tally applies to every month: 20 x 2 x 150,000
    assert_eq!(
        decimal_field(find_row(&report, "2"), "base_pay"),
        decimal("6000000")
    );
    assert_eq!(
        decimal_field(find_row(&report, "3"), "base_pay"),
        Decimal::ZERO
    );
}

#[tokio::test]
async fn test_payroll_is_repeatable() {
    let (_, first) = get_json(create_router_for_test(), "/payroll/2024-06").await;
    let (_, second) = get_json(create_router_for_test(), "/payroll/2024-06").await;
    assert_eq!(first["breakdowns"], second["breakdowns"]);
    assert_eq!(first["totals"], second["totals"]);
}

#[tokio::test]
async fn test_payroll_malformed_period() {
    for uri in ["/payroll/2024-6", "/payroll/2024-13", "/payroll/june"] {
        let (status, error) = get_json(create_router_for_test(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(error["code"], "INVALID_PERIOD");
    }
}

// =============================================================================
// Inline calculation
// =============================================================================

#[tokio::test]
async fn test_calculate_inline_attendance() {
    let body = json!({
        "period": "2024-06",
        "employees": [
            { "id": "E1", "fullName": "Nguyen Van A", "salaryPerHour": 50000 },
            { "id": "E2", "fullName": "Tran Thi B", "salaryPerHour": 40000 }
        ],
        "attendance": [
            { "userId": "E1", "date": "2024-06-03", "checkIn": "08:00", "checkOut": "12:00" },
            { "userId": "E1", "date": "2024-06-04", "checkIn": "13:00", "checkOut": "18:00" }
        ],
        "adjustments": [
            { "employeeId": "E1", "period": "2024-06", "kind": "bonus", "amount": 200000 },
            { "employeeId": "E1", "period": "2024-06", "kind": "penalty", "amount": 50000 }
        ]
    });

    let (status, report) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let first = find_row(&report, "E1");
    assert_eq!(decimal_field(first, "base_pay"), decimal("450000"));
    assert_eq!(decimal_field(first, "net_pay"), decimal("600000"));

    let second = find_row(&report, "E2");
    assert_eq!(decimal_field(second, "net_pay"), Decimal::ZERO);
}

#[tokio::test]
async fn test_calculate_inline_shift_completions() {
    let body = json!({
        "period": "2024-06",
        "employees": [{ "id": 1, "fullName": "A" }],
        "shift_completions": [
            { "employeeId": 1, "period": "2024-06", "daysWorked": 10, "shiftsPerDay": 2, "payCoefficient": "1.5" }
        ]
    });

    let (status, report) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["time_source"], "shift_completion");
    assert_eq!(
        decimal_field(find_row(&report, "1"), "base_pay"),
        decimal("30")
    );
}

#[tokio::test]
async fn test_calculate_huge_rate_does_not_overflow() {
    let body = json!({
        "period": "2024-06",
        "employees": [
            { "id": "E1", "fullName": "A", "salaryPerHour": "79228162514264337593543950335" }
        ],
        "attendance": [
            { "userId": "E1", "date": "2024-06-03", "checkIn": "08:00", "checkOut": "17:00" }
        ]
    });

    let (status, report) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let row = find_row(&report, "E1");
    assert_eq!(decimal_field(row, "worked_hours"), decimal("9"));
    assert!(decimal_field(row, "base_pay") > Decimal::ZERO);
    assert_eq!(
        decimal_field(&report["totals"], "net_pay"),
        decimal_field(row, "net_pay")
    );
}

#[tokio::test]
async fn test_calculate_rejects_both_time_sources() {
    let body = json!({
        "period": "2024-06",
        "employees": [],
        "attendance": [],
        "shift_completions": []
    });

    let (status, error) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_calculate_rejects_negative_adjustment() {
    let body = json!({
        "period": "2024-06",
        "employees": [{ "id": 1, "fullName": "A" }],
        "adjustments": [
            { "employeeId": 1, "period": "2024-06", "kind": "penalty", "amount": -10 }
        ]
    });

    let (status, error) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ADJUSTMENT");
}

#[tokio::test]
async fn test_calculate_missing_field() {
    let body = json!({ "period": "2024-06" });

    let (status, error) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_calculate_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payroll/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"period\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, error) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// Daily pay
// =============================================================================

#[tokio::test]
async fn test_daily_pay() {
    let (status, pay) = get_json(create_router_for_test(), "/employees/2/daily-pay/2024-06-03").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pay["employee_id"], "2");
    assert_eq!(pay["date"], "2024-06-03");
    assert_eq!(decimal_field(&pay, "worked_hours"), decimal("4.5"));
    assert_eq!(decimal_field(&pay, "amount"), decimal("189000"));
}

#[tokio::test]
async fn test_daily_pay_day_off() {
    let (status, pay) = get_json(create_router_for_test(), "/employees/1/daily-pay/2024-06-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&pay, "amount"), Decimal::ZERO);
}

#[tokio::test]
async fn test_daily_pay_unknown_employee() {
    let (status, error) =
        get_json(create_router_for_test(), "/employees/404/daily-pay/2024-06-03").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Workforce report
// =============================================================================

#[tokio::test]
async fn test_workforce_report() {
    let (status, report) = get_json(create_router_for_test(), "/reports/2024-06/workforce").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(report["period"], "2024-06");
    assert_eq!(report["active_employees"], 3);
    assert_eq!(report["total_shifts"], 5);
    assert_eq!(report["absent_days"], 115);
    assert_eq!(
        decimal_field(&report, "average_basic_salary"),
        decimal("9333333.33")
    );
    assert_eq!(decimal_field(&report, "labour_cost"), decimal("1119000"));

    let branches = report["headcount_by_branch"].as_array().unwrap();
    assert_eq!(branches[0]["name"], "District 1");
    assert_eq!(branches[0]["count"], 2);
    assert_eq!(branches[1]["count"], 1);
}

// =============================================================================
// Data source failures
// =============================================================================

#[tokio::test]
async fn test_missing_store_is_service_unavailable() {
    let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
    let router = create_router(AppState::new(
        config,
        Arc::new(JsonFileRepository::new("./data/does-not-exist.json")),
    ));

    let (status, error) = get_json(router, "/payroll/2024-06").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error["code"], "DATA_SOURCE_ERROR");
}
