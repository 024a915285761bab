//! Cadence simulation for a single model.
//!
//! This module answers "what does it take to run this model at this
//! cadence?": headcount, takt time and output for the configured shift,
//! together with how that compares to the crew on the line today.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::models::{
    MotorcycleModel, ShiftConfig, SimulationResult, StaffingAction, StaffingComparison,
    StaffingPoint, StaffingRecommendation,
};

use super::cadence::{
    cadence_for_personnel, daily_output, monthly_output, personnel_delta, required_personnel,
    takt_time_seconds,
};
use super::shift_time::available_minutes;

/// Crew size assumed when a model is selected without a current headcount.
pub const DEFAULT_CURRENT_PERSONNEL: u32 = 20;

/// Simulates running `model` at `target_cadence` with the given shift.
///
/// This function:
/// 1. Derives the headcount (MOD) the cadence requires
/// 2. Computes takt time and the delta against `current_personnel`
/// 3. Projects daily and monthly output over the shift's available time
///
/// # Returns
///
/// `None` when `target_cadence` or `current_personnel` is not positive, or
/// when the model's work content is not positive. There is no simulation to
/// show in those cases. Figures too large for a `Decimal` also give `None`.
///
/// # Examples
///
/// ```
/// use line_planner::calculation::simulate;
/// use line_planner::models::{BreakSchedule, LineName, MotorcycleModel, ShiftConfig};
/// use rust_decimal::Decimal;
///
/// let model = MotorcycleModel {
///     id: "nkd-125".to_string(),
///     name: "NKD 125".to_string(),
///     max_cadence: Decimal::new(32, 0),
///     work_content: Decimal::new(3, 0),
///     line: LineName::L1Ctg,
/// };
/// let breaks = BreakSchedule { am: 10, lunch: 30, pm: 10 };
/// let shift = ShiftConfig::parse("06:00", "14:00", breaks, 24)?;
///
/// let result = simulate(&model, &shift, Decimal::new(20, 0), Decimal::new(20, 0)).unwrap();
/// assert_eq!(result.required_personnel, Decimal::ONE);
/// assert_eq!(result.takt_time, Decimal::new(180, 0));
/// # Ok::<(), line_planner::error::PlannerError>(())
/// ```
pub fn simulate(
    model: &MotorcycleModel,
    shift: &ShiftConfig,
    current_personnel: Decimal,
    target_cadence: Decimal,
) -> Option<SimulationResult> {
    if current_personnel <= Decimal::ZERO {
        return None;
    }

    let work_content = model.work_content;
    let required = required_personnel(target_cadence, work_content)?;
    let takt_time = takt_time_seconds(target_cadence)?;

    let minutes = available_minutes(shift);
    let daily = daily_output(target_cadence, minutes)?;
    let monthly = monthly_output(daily, shift.working_days_per_month)?;

    debug!(
        model_id = %model.id,
        target_cadence = %target_cadence,
        required_personnel = %required,
        available_minutes = minutes,
        "Simulated cadence"
    );

    Some(SimulationResult {
        required_personnel: required,
        takt_time,
        new_work_content: work_content,
        personnel_delta: personnel_delta(required, current_personnel),
        daily_output: daily,
        monthly_output: monthly,
    })
}

/// Sets the current crew and the cadence it sustains against the crew
/// needed for `target_cadence`.
///
/// Returns `None` under the same conditions as [`simulate`].
pub fn compare_staffing(
    model: &MotorcycleModel,
    current_personnel: Decimal,
    target_cadence: Decimal,
) -> Option<StaffingComparison> {
    let current_cadence = cadence_for_personnel(current_personnel, model.work_content)?;
    let required = required_personnel(target_cadence, model.work_content)?;

    Some(StaffingComparison {
        current: StaffingPoint {
            personnel: current_personnel,
            cadence: current_cadence,
        },
        simulated: StaffingPoint {
            personnel: required,
            cadence: target_cadence,
        },
    })
}

/// Turns a simulation into whole-operator staffing advice.
///
/// The line is staffed with the required headcount rounded up. A positive
/// delta is covered by hiring its ceiling; otherwise the surplus is the
/// magnitude of the delta's floor.
///
/// Returns `None` only if the figures do not fit in a `u64`.
pub fn recommend_staffing(result: &SimulationResult) -> Option<StaffingRecommendation> {
    let headcount = result.required_personnel.ceil().to_u64()?;
    let delta = result.personnel_delta;

    let action = if delta > Decimal::ZERO {
        StaffingAction::Hire {
            additional: delta.ceil().to_u64()?,
        }
    } else {
        StaffingAction::Surplus {
            excess: delta.floor().abs().to_u64()?,
        }
    };

    Some(StaffingRecommendation { headcount, action })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakSchedule, LineName};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_model(work_content: &str) -> MotorcycleModel {
        MotorcycleModel {
            id: "nkd-125".to_string(),
            name: "NKD 125".to_string(),
            max_cadence: dec("32"),
            work_content: dec(work_content),
            line: LineName::L1Ctg,
        }
    }

    fn create_test_shift() -> ShiftConfig {
        ShiftConfig::parse(
            "06:00",
            "14:00",
            BreakSchedule {
                am: 10,
                lunch: 30,
                pm: 10,
            },
            24,
        )
        .unwrap()
    }

    #[test]
    fn test_simulation_example() {
        let model = create_test_model("3.0");
        let shift = create_test_shift();

        let result = simulate(&model, &shift, dec("20"), dec("20")).unwrap();

        assert_eq!(result.required_personnel, dec("1"));
        assert_eq!(result.takt_time, dec("180"));
        assert_eq!(result.new_work_content, dec("3.0"));
        assert_eq!(result.personnel_delta, dec("-19"));
    }

    #[test]
    fn test_simulation_output_uses_available_time() {
        let model = create_test_model("2.5");
        let shift = ShiftConfig::parse("06:00", "14:00", BreakSchedule::default(), 22).unwrap();

        let result = simulate(&model, &shift, dec("1"), dec("30")).unwrap();

        // 30 M/h over 480 min
        assert_eq!(result.daily_output, dec("240"));
        assert_eq!(result.monthly_output, dec("5280"));
        assert_eq!(result.personnel_delta, dec("0.25"));
    }

    #[test]
    fn test_simulation_absent_without_positive_inputs() {
        let model = create_test_model("3.0");
        let shift = create_test_shift();

        assert!(simulate(&model, &shift, dec("20"), dec("0")).is_none());
        assert!(simulate(&model, &shift, dec("0"), dec("20")).is_none());
        assert!(simulate(&model, &shift, dec("-2"), dec("20")).is_none());

        let broken = create_test_model("0");
        assert!(simulate(&broken, &shift, dec("20"), dec("20")).is_none());
    }

    #[test]
    fn test_simulation_absent_when_output_overflows() {
        let model = create_test_model("2.5");
        let shift = create_test_shift();

        // Headcount and takt time fit, 430 min of output does not
        let huge = dec("1000000000000000000000000000");
        assert!(required_personnel(huge, model.work_content).is_some());
        assert!(simulate(&model, &shift, dec("20"), huge).is_none());
    }

    #[test]
    fn test_simulation_keeps_negative_output_for_overbooked_shift() {
        let model = create_test_model("3.0");
        let shift = ShiftConfig::parse(
            "08:00",
            "09:00",
            BreakSchedule {
                am: 30,
                lunch: 60,
                pm: 30,
            },
            20,
        )
        .unwrap();

        let result = simulate(&model, &shift, dec("1"), dec("20")).unwrap();
        assert_eq!(result.daily_output, dec("-20"));
        assert_eq!(result.monthly_output, dec("-400"));
    }

    #[test]
    fn test_simulation_does_not_touch_model() {
        let model = create_test_model("3.0");
        let before = model.clone();
        let _ = simulate(&model, &create_test_shift(), dec("20"), dec("25"));
        assert_eq!(model, before);
    }

    #[test]
    fn test_compare_staffing() {
        let model = create_test_model("3.0");

        let comparison = compare_staffing(&model, dec("20"), dec("20")).unwrap();

        // 20 people at 3 min/unit sustain 400 M/h
        assert_eq!(comparison.current.personnel, dec("20"));
        assert_eq!(comparison.current.cadence, dec("400"));
        assert_eq!(comparison.simulated.personnel, dec("1"));
        assert_eq!(comparison.simulated.cadence, dec("20"));
    }

    #[test]
    fn test_compare_staffing_absent_without_crew() {
        let model = create_test_model("3.0");
        assert!(compare_staffing(&model, dec("0"), dec("20")).is_none());
        assert!(compare_staffing(&model, dec("20"), dec("0")).is_none());
    }

    #[test]
    fn test_recommend_hiring() {
        let model = create_test_model("4.5");
        // 40 M/h * 4.5 / 60 = 3.0
        let result = simulate(&model, &create_test_shift(), dec("1.5"), dec("40")).unwrap();

        let recommendation = recommend_staffing(&result).unwrap();
        assert_eq!(recommendation.headcount, 3);
        assert_eq!(recommendation.action, StaffingAction::Hire { additional: 2 });
    }

    #[test]
    fn test_recommend_surplus_rounds_away_from_zero() {
        let model = create_test_model("2.5");
        // 30 M/h * 2.5 / 60 = 1.25 against a crew of 3
        let result = simulate(&model, &create_test_shift(), dec("3"), dec("30")).unwrap();

        let recommendation = recommend_staffing(&result).unwrap();
        assert_eq!(recommendation.headcount, 2);
        assert_eq!(recommendation.action, StaffingAction::Surplus { excess: 2 });
    }

    #[test]
    fn test_recommend_balanced_crew() {
        let model = create_test_model("3.0");
        let result = simulate(&model, &create_test_shift(), dec("1"), dec("20")).unwrap();

        let recommendation = recommend_staffing(&result).unwrap();
        assert_eq!(recommendation.headcount, 1);
        assert_eq!(recommendation.action, StaffingAction::Surplus { excess: 0 });
    }
}
