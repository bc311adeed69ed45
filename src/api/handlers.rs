//! HTTP request handlers for the payroll engine API.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::models::{EmployeeId, PayrollPeriod};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/:period", get(payroll_handler))
        .route("/employees/:id/daily-pay/:date", get(daily_pay_handler))
        .route("/reports/:period/workforce", get(workforce_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Runs repository-backed work off the async executor.
async fn run_blocking<T, F>(correlation_id: Uuid, work: F) -> Result<T, ApiErrorResponse>
where
    F: FnOnce() -> PayrollResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            warn!(correlation_id = %correlation_id, error = %err, "Request failed");
            Err(err.into())
        }
        Err(join_error) => {
            warn!(correlation_id = %correlation_id, error = %join_error, "Worker task failed");
            Err(ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL_ERROR", "Payroll computation did not complete"),
            })
        }
    }
}

fn parse_period(correlation_id: Uuid, raw: &str) -> Result<PayrollPeriod, ApiErrorResponse> {
    raw.parse::<PayrollPeriod>().map_err(|err| {
        warn!(correlation_id = %correlation_id, period = %raw, "Rejected payroll period");
        err.into()
    })
}

/// Handler for `GET /health`.
async fn health_handler() -> Response {
    json_ok(json!({ "status": "ok" }))
}

/// Handler for `GET /payroll/:period`.
///
/// Runs the payroll aggregation over the configured data store.
async fn payroll_handler(
    State(state): State<AppState>,
    Path(raw_period): Path<String>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, period = %raw_period, "Processing payroll request");

    let period = parse_period(correlation_id, &raw_period)?;
    let service = state.service().clone();
    let report = run_blocking(correlation_id, move || service.run(period)).await?;

    info!(
        correlation_id = %correlation_id,
        calculation_id = %report.calculation_id,
        employees = report.totals.employees,
        "Payroll request completed"
    );
    Ok(json_ok(report))
}

/// Handler for `POST /payroll/calculate`.
///
/// Aggregates the collections posted in the body. Nothing is read from the
/// data store.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let employee_count = request.employees.len();
    let defaults = state.config().aggregation_options();
    let report = request.into_report(&defaults).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Calculation rejected");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        period = %report.period,
        employees = employee_count,
        net_pay = %report.totals.net_pay,
        "Calculation completed successfully"
    );
    Ok(json_ok(report))
}

/// Handler for `GET /employees/:id/daily-pay/:date`.
async fn daily_pay_handler(
    State(state): State<AppState>,
    Path((raw_id, raw_date)): Path<(String, String)>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %raw_id,
        date = %raw_date,
        "Processing daily pay request"
    );

    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| ApiErrorResponse::bad_request(ApiError::invalid_date(&raw_date)))?;
    let employee_id = EmployeeId::new(raw_id);
    let service = state.service().clone();
    let pay = run_blocking(correlation_id, move || service.daily_pay(&employee_id, date)).await?;

    Ok(json_ok(pay))
}

/// Handler for `GET /reports/:period/workforce`.
async fn workforce_handler(
    State(state): State<AppState>,
    Path(raw_period): Path<String>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, period = %raw_period, "Processing workforce request");

    let period = parse_period(correlation_id, &raw_period)?;
    let service = state.service().clone();
    let report = run_blocking(correlation_id, move || service.workforce(period)).await?;

    Ok(json_ok(report))
}
