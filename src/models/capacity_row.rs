//! Line capacity projection rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projected capacity of one model when the line keeps the crew sized for
/// the star model.
///
/// # Example
///
/// ```
/// use line_planner::models::CapacityRow;
/// use rust_decimal::Decimal;
///
/// let row = CapacityRow {
///     model_id: "apache-160".to_string(),
///     name: "Apache 160".to_string(),
///     work_content: Decimal::new(5, 0),
///     projected_cadence: Decimal::new(15, 0),
///     monthly_output: Decimal::new(2580, 0),
///     is_star: false,
/// };
/// assert!(!row.is_star);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRow {
    /// Id of the projected model.
    pub model_id: String,
    /// Display name of the projected model.
    pub name: String,
    /// Labor minutes per unit of the projected model.
    pub work_content: Decimal,
    /// Units per hour the fixed crew achieves on this model.
    pub projected_cadence: Decimal,
    /// Units per month at the projected cadence.
    pub monthly_output: Decimal,
    /// True for the reference model the crew was sized on.
    pub is_star: bool,
}
