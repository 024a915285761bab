//! Support area staffing.
//!
//! A support area grows with the assembly line: if the line headcount goes
//! up by some factor, the area's headcount goes up by the same factor,
//! rounded up to whole people. Under-staffing a support area is never an
//! acceptable result, so the rounding is always upward.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::SupportStaffingResult;

/// Scales a support area's staffing to a new line headcount.
///
/// `required = ceil(current_area_staff * target_line_staff / current_line_staff)`.
/// The ceiling is taken in integer arithmetic, so `required` never lands one
/// above an exact whole result.
///
/// # Returns
///
/// `None` when any input is zero.
///
/// # Examples
///
/// ```
/// use line_planner::calculation::scale_support_staffing;
/// use rust_decimal::Decimal;
///
/// let result = scale_support_staffing(40, 60, 5).unwrap();
/// assert_eq!(result.factor, Decimal::new(15, 1));
/// assert_eq!(result.exact, Decimal::new(75, 1));
/// assert_eq!(result.required, 8);
/// assert_eq!(result.delta, 3);
/// ```
pub fn scale_support_staffing(
    current_line_staff: u32,
    target_line_staff: u32,
    current_area_staff: u32,
) -> Option<SupportStaffingResult> {
    if current_line_staff == 0 || target_line_staff == 0 || current_area_staff == 0 {
        return None;
    }

    let scaled = u64::from(current_area_staff) * u64::from(target_line_staff);
    let required = scaled.div_ceil(u64::from(current_line_staff));

    let factor = Decimal::from(target_line_staff) / Decimal::from(current_line_staff);
    let exact = Decimal::from(scaled) / Decimal::from(current_line_staff);
    let delta = i64::try_from(required).unwrap_or(i64::MAX) - i64::from(current_area_staff);

    debug!(
        current_line_staff,
        target_line_staff,
        current_area_staff,
        required,
        "Scaled support area staffing"
    );

    Some(SupportStaffingResult {
        factor,
        required,
        exact,
        delta,
    })
}
