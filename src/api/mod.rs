//! HTTP API for the payroll engine.
//!
//! Exposes the monthly payroll run, inline calculations over posted data,
//! single-day pay and the workforce report as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
