//! Available shift time calculation.
//!
//! Converts a [`ShiftConfig`] into the net minutes per day the line can run.

use rust_decimal::Decimal;

use crate::models::ShiftConfig;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns the length of the shift in minutes before breaks.
///
/// An end time earlier than the start time is read as an overnight shift
/// and wraps past midnight.
pub fn shift_span_minutes(shift: &ShiftConfig) -> i64 {
    let span = shift.end_minute_of_day() - shift.start_minute_of_day();
    if span < 0 { span + MINUTES_PER_DAY } else { span }
}

/// Calculates the net minutes per day available for production.
///
/// The result is the shift span minus the morning, lunch and afternoon
/// breaks. It is not floored: breaks longer than the shift give a negative
/// value, which callers must report rather than clamp.
///
/// # Examples
///
/// ```
/// use line_planner::calculation::available_minutes;
/// use line_planner::models::{BreakSchedule, ShiftConfig};
///
/// let shift = ShiftConfig::parse(
///     "06:00",
///     "14:00",
///     BreakSchedule { am: 10, lunch: 30, pm: 10 },
///     24,
/// )?;
/// assert_eq!(available_minutes(&shift), 430);
/// # Ok::<(), line_planner::error::PlannerError>(())
/// ```
pub fn available_minutes(shift: &ShiftConfig) -> i64 {
    shift_span_minutes(shift) - shift.breaks.total_minutes()
}

/// Net available time per day expressed in hours.
pub fn available_hours(shift: &ShiftConfig) -> Decimal {
    Decimal::from(available_minutes(shift)) / Decimal::from(60)
}
