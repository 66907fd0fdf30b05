//! HTTP request handlers for the employment credit engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::str::FromStr;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    FollowupYear, apply_caps_and_min_tax, build_clawback_schedule, calculate_gross_credit,
};
use crate::config::PolicyParameters;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, ClawbackMethod, CompanyClassification, HeadcountInputs};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the computed credit result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let params = state.policy().params();

    // Industry screening happens here, not in the engine core: the
    // calculators assume eligibility was already confirmed.
    if let Some(industry) = request.industry.as_deref()
        && params.is_excluded_industry(industry)
    {
        warn!(
            correlation_id = %correlation_id,
            industry = %industry,
            "Excluded industry"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::excluded_industry(industry)),
        )
            .into_response();
    }

    // Perform the calculation
    let start_time = Instant::now();
    match perform_calculation(correlation_id, &request, params) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                size = %result.company.size,
                region = %result.company.region,
                gross_credit = %result.gross_credit.total,
                applied_credit = %result.applied_credit.amount,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the credit calculation for one request.
///
/// Control flow is strictly linear: gross credit, then caps and the
/// minimum-tax floor, then (when requested) the clawback schedule based on
/// the capped figure.
fn perform_calculation(
    correlation_id: Uuid,
    request: &CalculationRequest,
    params: &PolicyParameters,
) -> EngineResult<CalculationResult> {
    let company: CompanyClassification = request.company.clone().into();
    let heads: HeadcountInputs = request.headcounts.clone().into();

    heads.validate()?;
    if let Some(tax) = request.tax_before_credit
        && tax.is_sign_negative()
    {
        return Err(EngineError::ConstraintViolation {
            field: "tax_before_credit".to_string(),
            message: format!("liability {} is negative", tax),
        });
    }

    let gross_credit = calculate_gross_credit(company.size, company.region, &heads, params);
    let applied_credit =
        apply_caps_and_min_tax(gross_credit.total, params, request.tax_before_credit);
    let retention_years = params.retention_years(company.size);

    let clawback = match &request.clawback {
        Some(clawback_request) => {
            let method = ClawbackMethod::from_str(&clawback_request.method)?;
            let followups: Vec<FollowupYear> = clawback_request
                .followup_years
                .iter()
                .cloned()
                .map(Into::into)
                .collect();
            Some(build_clawback_schedule(
                applied_credit.amount,
                heads.curr_total,
                &followups,
                retention_years,
                method,
                params.clawback_tiers(),
            )?)
        }
        None => None,
    };

    Ok(CalculationResult {
        id: correlation_id,
        calculated_at: Utc::now(),
        company,
        gross_credit,
        applied_credit,
        retention_years,
        clawback,
    })
}
