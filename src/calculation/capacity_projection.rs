//! Line capacity projection from a star model.
//!
//! The crew on a line is sized for one reference ("star") model at a target
//! cadence. The same crew then runs every model on that line, so each
//! model's achievable cadence follows from its own work content.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CapacityRow, MotorcycleModel, ShiftConfig};

use super::cadence::{daily_output, monthly_output, required_personnel};
use super::shift_time::available_minutes;

/// Headcount fixed on the line by running `star` at `target_cadence`.
pub fn fixed_personnel(star: &MotorcycleModel, target_cadence: Decimal) -> Option<Decimal> {
    required_personnel(target_cadence, star.work_content)
}

/// Projects cadence and monthly output for each model on the star's line.
///
/// For every model `m` the crew of [`fixed_personnel`] gives
/// `60 * fixed_personnel / m.work_content` units per hour, evaluated as
/// `target_cadence * star.work_content / m.work_content` so that the star
/// row returns `target_cadence` exactly.
///
/// # Arguments
///
/// * `star` - The reference model, if one is selected
/// * `target_cadence` - Units per hour wanted on the star model
/// * `line_models` - Models sharing the star's line, in display order
/// * `shift` - The shift the line works
///
/// # Returns
///
/// One row per model in input order. Empty when no star is given, the
/// target cadence is not positive, the star's work content is not
/// positive, or any row's figures overflow a `Decimal`. Models with
/// non-positive work content are left out.
///
/// # Examples
///
/// ```
/// use line_planner::calculation::project_line_capacity;
/// use line_planner::models::{BreakSchedule, LineName, MotorcycleModel, ShiftConfig};
/// use rust_decimal::Decimal;
///
/// let star = MotorcycleModel {
///     id: "nkd-125".to_string(),
///     name: "NKD 125".to_string(),
///     max_cadence: Decimal::new(32, 0),
///     work_content: Decimal::new(25, 1),
///     line: LineName::L1Ctg,
/// };
/// let other = MotorcycleModel {
///     id: "apache-160".to_string(),
///     name: "Apache 160".to_string(),
///     max_cadence: Decimal::new(18, 0),
///     work_content: Decimal::new(5, 0),
///     line: LineName::L1Ctg,
/// };
/// let shift = ShiftConfig::parse("06:00", "14:00", BreakSchedule::default(), 24)?;
///
/// let rows = project_line_capacity(Some(&star), Decimal::new(30, 0), [&star, &other], &shift);
/// assert_eq!(rows[0].projected_cadence, Decimal::new(30, 0));
/// assert_eq!(rows[1].projected_cadence, Decimal::new(15, 0));
/// # Ok::<(), line_planner::error::PlannerError>(())
/// ```
pub fn project_line_capacity<'a>(
    star: Option<&MotorcycleModel>,
    target_cadence: Decimal,
    line_models: impl IntoIterator<Item = &'a MotorcycleModel>,
    shift: &ShiftConfig,
) -> Vec<CapacityRow> {
    let Some(star) = star else {
        return Vec::new();
    };
    if fixed_personnel(star, target_cadence).is_none() {
        return Vec::new();
    }

    let minutes = available_minutes(shift);

    let rows: Option<Vec<CapacityRow>> = line_models
        .into_iter()
        .filter(|model| {
            if model.work_content <= Decimal::ZERO {
                debug!(model_id = %model.id, "Skipping model without positive work content");
                return false;
            }
            true
        })
        .map(|model| {
            let ratio = star.work_content.checked_div(model.work_content)?;
            let projected_cadence = target_cadence.checked_mul(ratio)?;
            let daily = daily_output(projected_cadence, minutes)?;

            Some(CapacityRow {
                model_id: model.id.clone(),
                name: model.name.clone(),
                work_content: model.work_content,
                projected_cadence,
                monthly_output: monthly_output(daily, shift.working_days_per_month)?,
                is_star: model.id == star.id,
            })
        })
        .collect();

    rows.unwrap_or_else(|| {
        debug!(star_id = %star.id, target_cadence = %target_cadence, "Projection overflowed");
        Vec::new()
    })
}
