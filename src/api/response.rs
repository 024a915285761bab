//! Response types for the line capacity planner API.
//!
//! This module defines the response bodies, the warnings attached to them,
//! and the error responses returned by the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::{
    CapacityRow, LineName, MotorcycleModel, ShiftConfig, SimulationResult, StaffingComparison,
    StaffingRecommendation, SupportArea, SupportStaffingResult,
};

/// A figure that was computed faithfully but looks operationally wrong.
///
/// Warnings never change the numbers they accompany.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// Response body for `GET /shift`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftResponse {
    /// The configured shift.
    pub shift: ShiftConfig,
    /// Net production minutes per day.
    pub available_minutes: i64,
    /// Net production hours per day.
    pub available_hours: Decimal,
    /// Warnings about the shift.
    pub warnings: Vec<PlanningWarning>,
}

/// Response body for `POST /simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Id of the simulated model.
    pub model_id: String,
    /// Crew used for the comparison, after defaults.
    pub current_personnel: Decimal,
    /// Cadence simulated, after defaults.
    pub target_cadence: Decimal,
    /// Net production minutes per day of the shift used.
    pub available_minutes: i64,
    /// The simulation, or `null` when inputs were not positive.
    pub result: Option<SimulationResult>,
    /// Current against simulated staffing.
    pub comparison: Option<StaffingComparison>,
    /// Whole-operator staffing advice.
    pub recommendation: Option<StaffingRecommendation>,
    /// Warnings about the inputs or results.
    pub warnings: Vec<PlanningWarning>,
}

/// Response body for `POST /capacity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityResponse {
    /// The projected line.
    pub line: LineName,
    /// Id of the star model, if one was given.
    pub star_model_id: Option<String>,
    /// Crew size fixed by the star model.
    pub fixed_personnel: Option<Decimal>,
    /// Net production minutes per day of the shift used.
    pub available_minutes: i64,
    /// One row per line model, in catalog order.
    pub rows: Vec<CapacityRow>,
    /// Warnings about the inputs or results.
    pub warnings: Vec<PlanningWarning>,
}

/// Response body for `POST /support-staffing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportStaffingResponse {
    /// The area that was sized, echoed from the request.
    pub area: Option<SupportArea>,
    /// The scaled staffing, or `null` when an input was zero.
    pub result: Option<SupportStaffingResult>,
}

/// One entry of `GET /support-areas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportAreaEntry {
    /// Machine identifier of the area.
    pub id: SupportArea,
    /// Plant-floor label.
    pub label: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a model not found error response.
    pub fn model_not_found(model_id: &str) -> Self {
        Self::with_details(
            "MODEL_NOT_FOUND",
            format!("Model not found: {}", model_id),
            format!("The model id '{}' is not in the plant catalog", model_id),
        )
    }

    /// Creates the error for a star model that is not assembled on the
    /// requested line.
    pub fn star_off_line(star: &MotorcycleModel, line: LineName) -> Self {
        Self::with_details(
            "STAR_MODEL_OFF_LINE",
            format!("Star model {} is not assembled on {}", star.id, line),
            format!("{} runs on {}", star.name, star.line),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PlannerError> for ApiErrorResponse {
    fn from(error: PlannerError) -> Self {
        match error {
            PlannerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            PlannerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            PlannerError::InvalidModel { model_id, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid model '{}'", model_id),
                    message,
                ),
            },
            PlannerError::ModelNotFound { model_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::model_not_found(&model_id),
            },
            PlannerError::InvalidTime { value } => ApiErrorResponse::bad_request(
                ApiError::validation_error(format!("Invalid time '{}': expected HH:mm", value)),
            ),
        }
    }
}
