//! Request types for the line capacity planner API.
//!
//! Numbers arrive already parsed. Inputs a form leaves empty are simply
//! omitted and fall back to the defaults documented on each field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LineName, ShiftConfig, SupportArea};

/// Request body for `POST /simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Id of the model to simulate.
    pub model_id: String,
    /// Crew on the line today. Defaults to 20 when omitted.
    #[serde(default)]
    pub current_personnel: Option<Decimal>,
    /// Units per hour to simulate. Defaults to the model's historical
    /// maximum when omitted.
    #[serde(default)]
    pub target_cadence: Option<Decimal>,
    /// Replaces the configured shift for this request.
    #[serde(default)]
    pub shift: Option<ShiftConfig>,
}

/// Request body for `POST /capacity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityRequest {
    /// The line to project.
    pub line: LineName,
    /// Id of the reference model the crew is sized on.
    #[serde(default)]
    pub star_model_id: Option<String>,
    /// Units per hour wanted on the star model.
    #[serde(default)]
    pub target_cadence: Decimal,
    /// Replaces the configured shift for this request.
    #[serde(default)]
    pub shift: Option<ShiftConfig>,
}

/// Request body for `POST /support-staffing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportStaffingRequest {
    /// The area being sized. Only echoed back.
    #[serde(default)]
    pub area: Option<SupportArea>,
    /// Assembly line headcount today.
    #[serde(default)]
    pub current_line_staff: u32,
    /// Assembly line headcount planned.
    #[serde(default)]
    pub target_line_staff: u32,
    /// Area headcount today.
    #[serde(default)]
    pub current_area_staff: u32,
}

/// Query parameters for `GET /models`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsQuery {
    /// Restricts the catalog to one line.
    #[serde(default)]
    pub line: Option<LineName>,
}
