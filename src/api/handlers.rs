//! HTTP request handlers for the line capacity planner API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    routing::{get, post},
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_CURRENT_PERSONNEL, available_hours, available_minutes, compare_staffing,
    fixed_personnel, project_line_capacity, recommend_staffing, scale_support_staffing, simulate,
};
use crate::models::{MotorcycleModel, SupportArea};

use super::request::{CapacityRequest, ModelsQuery, SimulationRequest, SupportStaffingRequest};
use super::response::{
    ApiError, ApiErrorResponse, CapacityResponse, ShiftResponse, SimulationResponse,
    SupportAreaEntry, SupportStaffingResponse,
};
use super::state::AppState;
use super::warnings::{check_available_time, simulation_warnings};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/models", get(list_models_handler))
        .route("/support-areas", get(list_support_areas_handler))
        .route("/shift", get(shift_handler))
        .route("/simulate", post(simulate_handler))
        .route("/capacity", post(capacity_handler))
        .route("/support-staffing", post(support_staffing_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
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
    ApiErrorResponse::bad_request(error)
}

/// Handler for `GET /models`.
async fn list_models_handler(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> Json<Vec<MotorcycleModel>> {
    let plant = state.plant();
    let models = match query.line {
        Some(line) => plant.models_on_line(line).into_iter().cloned().collect(),
        None => plant.models().to_vec(),
    };
    Json(models)
}

/// Handler for `GET /support-areas`.
async fn list_support_areas_handler() -> Json<Vec<SupportAreaEntry>> {
    Json(
        SupportArea::ALL
            .iter()
            .map(|area| SupportAreaEntry {
                id: *area,
                label: area.label().to_string(),
            })
            .collect(),
    )
}

/// Handler for `GET /shift`.
async fn shift_handler(State(state): State<AppState>) -> Json<ShiftResponse> {
    let shift = state.plant().shift().clone();
    let minutes = available_minutes(&shift);

    Json(ShiftResponse {
        available_hours: available_hours(&shift),
        available_minutes: minutes,
        warnings: check_available_time(minutes).into_iter().collect(),
        shift,
    })
}

/// Handler for `POST /simulate`.
///
/// Missing crew and cadence fall back to 20 people and the model's
/// historical maximum cadence.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let Json(request) = payload.map_err(|rejection| rejection_error(rejection, correlation_id))?;

    let plant = state.plant();
    let model = plant.get_model(&request.model_id).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            model_id = %request.model_id,
            "Model not found"
        );
        ApiErrorResponse::from(err)
    })?;
    let shift = request.shift.as_ref().unwrap_or_else(|| plant.shift());

    let current_personnel = request
        .current_personnel
        .unwrap_or_else(|| Decimal::from(DEFAULT_CURRENT_PERSONNEL));
    let target_cadence = request.target_cadence.unwrap_or(model.max_cadence);

    let start_time = Instant::now();
    let minutes = available_minutes(shift);
    let result = simulate(model, shift, current_personnel, target_cadence);
    let comparison = compare_staffing(model, current_personnel, target_cadence);
    let recommendation = result.as_ref().and_then(recommend_staffing);
    let warnings = simulation_warnings(model, target_cadence, minutes, result.as_ref());

    info!(
        correlation_id = %correlation_id,
        model_id = %model.id,
        has_result = result.is_some(),
        warnings = warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Simulation completed"
    );

    Ok(Json(SimulationResponse {
        model_id: model.id.clone(),
        current_personnel,
        target_cadence,
        available_minutes: minutes,
        result,
        comparison,
        recommendation,
        warnings,
    }))
}

/// Handler for `POST /capacity`.
///
/// A star model from another line is rejected with `400`.
async fn capacity_handler(
    State(state): State<AppState>,
    payload: Result<Json<CapacityRequest>, JsonRejection>,
) -> Result<Json<CapacityResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing capacity request");

    let Json(request) = payload.map_err(|rejection| rejection_error(rejection, correlation_id))?;

    let plant = state.plant();
    let star_model_id = request.star_model_id.filter(|id| !id.is_empty());
    let star = match star_model_id.as_deref() {
        Some(id) => Some(plant.get_model(id).map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                model_id = %id,
                "Star model not found"
            );
            ApiErrorResponse::from(err)
        })?),
        None => None,
    };
    // The crew is sized on the star, so only its own line can be projected
    if let Some(star) = star.filter(|star| !star.is_on_line(request.line)) {
        warn!(
            correlation_id = %correlation_id,
            model_id = %star.id,
            line = %request.line,
            "Star model is not on the requested line"
        );
        return Err(ApiErrorResponse::bad_request(ApiError::star_off_line(
            star,
            request.line,
        )));
    }
    let shift = request.shift.as_ref().unwrap_or_else(|| plant.shift());

    let start_time = Instant::now();
    let minutes = available_minutes(shift);
    let rows = project_line_capacity(
        star,
        request.target_cadence,
        plant.models_on_line(request.line),
        shift,
    );
    let fixed = star.and_then(|s| fixed_personnel(s, request.target_cadence));

    let warnings = check_available_time(minutes).into_iter().collect();

    info!(
        correlation_id = %correlation_id,
        line = %request.line,
        rows = rows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Capacity projection completed"
    );

    Ok(Json(CapacityResponse {
        line: request.line,
        star_model_id,
        fixed_personnel: fixed,
        available_minutes: minutes,
        rows,
        warnings,
    }))
}

/// Handler for `POST /support-staffing`.
async fn support_staffing_handler(
    payload: Result<Json<SupportStaffingRequest>, JsonRejection>,
) -> Result<Json<SupportStaffingResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing support staffing request");

    let Json(request) = payload.map_err(|rejection| rejection_error(rejection, correlation_id))?;

    let result = scale_support_staffing(
        request.current_line_staff,
        request.target_line_staff,
        request.current_area_staff,
    );

    info!(
        correlation_id = %correlation_id,
        area = ?request.area,
        required = ?result.as_ref().map(|r| r.required),
        "Support staffing completed"
    );

    Ok(Json(SupportStaffingResponse {
        area: request.area,
        result,
    }))
}
