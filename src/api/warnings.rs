//! Plausibility checks on planning inputs and results.
//!
//! The calculators return whatever the arithmetic gives. These checks only
//! flag figures a planner should look at twice; they never alter them.

use rust_decimal::Decimal;

use crate::models::{MotorcycleModel, SimulationResult};

use super::response::PlanningWarning;

fn warning(code: &str, message: String, severity: &str) -> PlanningWarning {
    PlanningWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

/// Flags a shift whose breaks leave no production time.
pub fn check_available_time(available_minutes: i64) -> Option<PlanningWarning> {
    if available_minutes < 0 {
        Some(warning(
            "NEGATIVE_AVAILABLE_TIME",
            format!(
                "Breaks exceed the shift length; available time is {} minutes",
                available_minutes
            ),
            "high",
        ))
    } else if available_minutes == 0 {
        Some(warning(
            "NO_AVAILABLE_TIME",
            "The shift leaves no production time after breaks".to_string(),
            "medium",
        ))
    } else {
        None
    }
}

/// Flags a target cadence above what the model has ever sustained.
pub fn check_cadence_ceiling(
    model: &MotorcycleModel,
    target_cadence: Decimal,
) -> Option<PlanningWarning> {
    if target_cadence > model.max_cadence {
        Some(warning(
            "ABOVE_HISTORICAL_MAX_CADENCE",
            format!(
                "Target cadence {} M/h exceeds the historical maximum of {} M/h for {}",
                target_cadence.normalize(),
                model.max_cadence.normalize(),
                model.name
            ),
            "low",
        ))
    } else {
        None
    }
}

/// Collects the warnings for a cadence simulation.
pub fn simulation_warnings(
    model: &MotorcycleModel,
    target_cadence: Decimal,
    available_minutes: i64,
    result: Option<&SimulationResult>,
) -> Vec<PlanningWarning> {
    let mut warnings = Vec::new();
    warnings.extend(check_available_time(available_minutes));
    if result.is_some() {
        warnings.extend(check_cadence_ceiling(model, target_cadence));
    }
    warnings
}
