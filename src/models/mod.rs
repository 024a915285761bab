//! Core data models for the line capacity planner.
//!
//! Reference data (models, shifts) and the value objects the calculators
//! return.

mod capacity_row;
mod motorcycle_model;
mod shift_config;
mod simulation_result;
mod support_area;

pub use capacity_row::CapacityRow;
pub use motorcycle_model::{LineName, MotorcycleModel};
pub use shift_config::{
    BreakSchedule, DEFAULT_WORKING_DAYS_PER_MONTH, ShiftConfig, TIME_FORMAT, parse_time,
};
pub use simulation_result::{
    SimulationResult, StaffingAction, StaffingComparison, StaffingPoint, StaffingRecommendation,
};
pub use support_area::{SupportArea, SupportStaffingResult};
