//! Calculation logic for the line capacity planner.
//!
//! This module contains the pure calculators: available shift time, the
//! cadence/staffing formulas, single-model cadence simulation, line capacity
//! projection from a star model, and proportional support area staffing.
//! None of them perform I/O or keep state between calls.

mod cadence;
mod capacity_projection;
mod shift_time;
mod simulation;
mod support_staffing;

pub use cadence::{
    MINUTES_PER_HOUR, SECONDS_PER_HOUR, cadence_for_personnel, daily_output, monthly_output,
    personnel_delta, required_personnel, takt_time_seconds,
};
pub use capacity_projection::{fixed_personnel, project_line_capacity};
pub use shift_time::{MINUTES_PER_DAY, available_hours, available_minutes, shift_span_minutes};
pub use simulation::{DEFAULT_CURRENT_PERSONNEL, compare_staffing, recommend_staffing, simulate};
pub use support_staffing::scale_support_staffing;
