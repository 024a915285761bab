//! HTTP API module for the line capacity planner.
//!
//! This module exposes the calculators as JSON endpoints for a planning
//! front end. It adds defaults and plausibility warnings around the
//! calculators but never changes their figures.

mod handlers;
mod request;
mod response;
mod state;
mod warnings;

pub use handlers::create_router;
pub use request::{CapacityRequest, ModelsQuery, SimulationRequest, SupportStaffingRequest};
pub use response::{
    ApiError, CapacityResponse, PlanningWarning, ShiftResponse, SimulationResponse,
    SupportStaffingResponse,
};
pub use state::AppState;
