//! Cadence, staffing and output formulas.
//!
//! These are the closed-form relations between cadence (units per hour),
//! work content (labor minutes per unit) and headcount:
//!
//! ```text
//! personnel = cadence * work_content / 60
//! cadence   = 60 * personnel / work_content
//! ```
//!
//! The two are exact inverses for a fixed work content. Functions that would
//! divide by, or are undefined for, a non-positive input return `None`, as do
//! functions whose result does not fit in a `Decimal`.

use rust_decimal::Decimal;

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Seconds in an hour.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Headcount needed to sustain `cadence` on a model with `work_content`.
///
/// Returns `None` unless both inputs are positive, or when the product
/// overflows.
///
/// # Examples
///
/// ```
/// use line_planner::calculation::required_personnel;
/// use rust_decimal::Decimal;
///
/// let personnel = required_personnel(Decimal::new(20, 0), Decimal::new(3, 0));
/// assert_eq!(personnel, Some(Decimal::ONE));
/// assert_eq!(required_personnel(Decimal::ZERO, Decimal::new(3, 0)), None);
/// ```
pub fn required_personnel(cadence: Decimal, work_content: Decimal) -> Option<Decimal> {
    if cadence <= Decimal::ZERO || work_content <= Decimal::ZERO {
        return None;
    }
    cadence
        .checked_mul(work_content)?
        .checked_div(Decimal::from(MINUTES_PER_HOUR))
}

/// Cadence a crew of `personnel` achieves on a model with `work_content`.
///
/// Returns `None` unless both inputs are positive, or when the result
/// overflows.
pub fn cadence_for_personnel(personnel: Decimal, work_content: Decimal) -> Option<Decimal> {
    if personnel <= Decimal::ZERO || work_content <= Decimal::ZERO {
        return None;
    }
    Decimal::from(MINUTES_PER_HOUR)
        .checked_mul(personnel)?
        .checked_div(work_content)
}

/// Seconds available per unit at `cadence`. `None` for a non-positive cadence.
pub fn takt_time_seconds(cadence: Decimal) -> Option<Decimal> {
    if cadence <= Decimal::ZERO {
        return None;
    }
    Decimal::from(SECONDS_PER_HOUR).checked_div(cadence)
}

/// Units produced in a day of `available_minutes` at `cadence`.
///
/// Negative available time yields negative output. `None` on overflow.
pub fn daily_output(cadence: Decimal, available_minutes: i64) -> Option<Decimal> {
    cadence
        .checked_mul(Decimal::from(available_minutes))?
        .checked_div(Decimal::from(MINUTES_PER_HOUR))
}

/// Units produced in a month. `None` on overflow.
pub fn monthly_output(daily_output: Decimal, working_days_per_month: u32) -> Option<Decimal> {
    daily_output.checked_mul(Decimal::from(working_days_per_month))
}

/// Required minus current headcount. Positive means more staff are needed.
pub fn personnel_delta(required: Decimal, current: Decimal) -> Decimal {
    required - current
}
