//! HTTP request handlers for the take-home pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_abn_scenario, calculate_comprehensive, calculate_tfn_scenario, compare_scenarios,
};
use crate::error::EngineError;
use crate::models::ScenarioInputs;

use super::request::{AbnScenarioRequest, CalculateRequest, CompareRequest, TfnScenarioRequest};
use super::response::{
    ApiError, ApiErrorResponse, ComparisonResponse, DisplaySummary, ScenarioResponse,
    TaxReferenceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/scenarios/tfn", post(tfn_scenario_handler))
        .route("/scenarios/abn", post(abn_scenario_handler))
        .route("/compare", post(compare_handler))
        .route("/calculate", post(calculate_handler))
        .route("/presets/trades", get(list_trades_handler))
        .route("/presets/trades/:id", get(get_trade_handler))
        .route("/presets/scenarios", get(list_scenarios_handler))
        .route("/reference/tax-brackets", get(tax_reference_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Unwraps a JSON body or builds the 400 response for its rejection.
fn parse_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(req)) => return Ok(req),
        Err(rejection) => rejection,
    };

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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    let response = ApiErrorResponse::bad_request(error);
    Err(json_response(response.status, response.error))
}

/// Handler for POST /scenarios/tfn.
async fn tfn_scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<TfnScenarioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing TFN scenario request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match calculate_tfn_scenario(
        request.hourly_rate,
        request.hours_per_week,
        request.weeks_per_year,
        state.config().tax_tables(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                gross_income = %result.gross_income,
                net_take_home = %result.net_take_home,
                duration_us = start_time.elapsed().as_micros(),
                "TFN scenario calculated"
            );
            let display = DisplaySummary::new(result.net_take_home, result.weekly_take_home);
            json_response(StatusCode::OK, ScenarioResponse { result, display })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /scenarios/abn.
async fn abn_scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<AbnScenarioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ABN scenario request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match calculate_abn_scenario(
        request.hourly_rate,
        request.hours_per_week,
        request.weeks_per_year,
        request.expense_rate,
        request.include_super,
        state.config().tax_tables(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                gross_income = %result.gross_income,
                net_take_home = %result.net_take_home,
                duration_us = start_time.elapsed().as_micros(),
                "ABN scenario calculated"
            );
            let display = DisplaySummary::new(result.net_take_home, result.weekly_take_home);
            json_response(StatusCode::OK, ScenarioResponse { result, display })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /compare.
///
/// Accepts raw rates, or a `preset_id` naming a preset scenario.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let config = state.config();
    let inputs = match request.preset_id.clone() {
        Some(id) => config
            .get_preset_scenario(&id)
            .map(|preset| preset.to_comparison_inputs()),
        None => request.into_inputs(),
    };

    let start_time = Instant::now();
    match inputs.and_then(|inputs| compare_scenarios(&inputs, config.tax_tables())) {
        Ok(comparison) => {
            info!(
                correlation_id = %correlation_id,
                difference = %comparison.difference,
                better_structure = ?comparison.better_structure,
                duration_us = start_time.elapsed().as_micros(),
                "Comparison completed successfully"
            );
            json_response(StatusCode::OK, ComparisonResponse::from(comparison))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /calculate.
///
/// Runs the layered calculation with overtime, allowances and FIFO.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_payload(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = ScenarioInputs::try_from(request)
        .and_then(|inputs| calculate_comprehensive(&inputs, state.config().config()));

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                structure = ?result.structure.kind(),
                working_weeks = %result.working_weeks,
                net_take_home = %result.net_take_home,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let display = DisplaySummary::new(result.net_take_home, result.weekly_take_home);
            json_response(StatusCode::OK, ScenarioResponse { result, display })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /presets/trades.
async fn list_trades_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().trade_presets())
}

/// Handler for GET /presets/trades/:id.
async fn get_trade_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.config().get_trade_preset(&id) {
        Ok(preset) => json_response(StatusCode::OK, preset),
        Err(err) => error_response(Uuid::new_v4(), err),
    }
}

/// Handler for GET /presets/scenarios.
async fn list_scenarios_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().preset_scenarios())
}

/// Handler for GET /reference/tax-brackets.
async fn tax_reference_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let tables = config.tax_tables();
    json_response(
        StatusCode::OK,
        TaxReferenceResponse {
            metadata: config.metadata().clone(),
            brackets: tables.brackets().to_vec(),
            medicare_levy_rate: tables.medicare().rate,
            medicare_levy_threshold: tables.medicare().threshold,
            lito_max_offset: tables.lito().max_offset,
            super_guarantee_rate: tables.super_guarantee_rate(),
        },
    )
}
