//! Support area types.
//!
//! Support areas feed or follow the assembly line and are staffed in
//! proportion to it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The support areas whose staffing tracks the assembly line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportArea {
    /// Unpacking of incoming parts ("Desempaque").
    Unpacking,
    /// Quality adjustments ("Q Ajustes").
    QualityAdjustments,
    /// In-process quality ("Q Proceso").
    QualityProcess,
    /// Line supply ("Abastecimiento").
    Supply,
    /// Loading of finished units ("Cargue").
    Loading,
}

impl SupportArea {
    /// All support areas, in display order.
    pub const ALL: [SupportArea; 5] = [
        SupportArea::Unpacking,
        SupportArea::QualityAdjustments,
        SupportArea::QualityProcess,
        SupportArea::Supply,
        SupportArea::Loading,
    ];

    /// Returns the plant-floor label of the area.
    pub fn label(&self) -> &'static str {
        match self {
            SupportArea::Unpacking => "Desempaque",
            SupportArea::QualityAdjustments => "Q Ajustes",
            SupportArea::QualityProcess => "Q Proceso",
            SupportArea::Supply => "Abastecimiento",
            SupportArea::Loading => "Cargue",
        }
    }
}

impl fmt::Display for SupportArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Staffing a support area needs after the line headcount changes.
///
/// # Example
///
/// ```
/// use line_planner::models::SupportStaffingResult;
/// use rust_decimal::Decimal;
///
/// let result = SupportStaffingResult {
///     factor: Decimal::new(15, 1),
///     required: 8,
///     exact: Decimal::new(75, 1),
///     delta: 3,
/// };
/// assert_eq!(result.required, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportStaffingResult {
    /// Ratio of target to current line headcount.
    pub factor: Decimal,
    /// Whole staff needed, rounded up.
    pub required: u64,
    /// Unrounded staff needed.
    pub exact: Decimal,
    /// Required minus current area staff.
    pub delta: i64,
}
