//! HTTP API module for the employment credit engine.
//!
//! This module provides the REST API endpoint for computing the employment
//! tax credit and its clawback schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
