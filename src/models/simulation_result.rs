//! Cadence simulation result models.
//!
//! This module contains the [`SimulationResult`] produced for one model at a
//! target cadence, and the comparison and recommendation derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Staffing and output figures for one model at a target cadence.
///
/// Derived on every input change and never stored; equality is by value.
///
/// # Example
///
/// ```
/// use line_planner::models::SimulationResult;
/// use rust_decimal::Decimal;
///
/// let result = SimulationResult {
///     required_personnel: Decimal::ONE,
///     takt_time: Decimal::new(180, 0),
///     new_work_content: Decimal::new(3, 0),
///     personnel_delta: Decimal::new(-19, 0),
///     daily_output: Decimal::new(8600, 1),
///     monthly_output: Decimal::new(20640, 0),
/// };
/// assert!(result.personnel_delta.is_sign_negative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Headcount needed to sustain the target cadence (MOD).
    pub required_personnel: Decimal,
    /// Seconds available per unit.
    pub takt_time: Decimal,
    /// Work content of the simulated model, in minutes per unit.
    pub new_work_content: Decimal,
    /// Required minus current headcount; positive means more staff are needed.
    pub personnel_delta: Decimal,
    /// Units per day at the target cadence.
    pub daily_output: Decimal,
    /// Units per month at the target cadence.
    pub monthly_output: Decimal,
}

/// Headcount and the cadence it sustains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingPoint {
    /// Headcount on the line.
    pub personnel: Decimal,
    /// Units per hour that headcount sustains.
    pub cadence: Decimal,
}

/// Current line staffing set against the simulated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingComparison {
    /// The line as it is staffed today.
    pub current: StaffingPoint,
    /// The line staffed for the target cadence.
    pub simulated: StaffingPoint,
}

/// What to do with line staffing to reach a simulated cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StaffingAction {
    /// Hire or reassign this many operators.
    Hire {
        /// Whole operators to add.
        additional: u64,
    },
    /// The current crew exceeds the need by this many operators.
    Surplus {
        /// Whole operators in excess.
        excess: u64,
    },
}

/// Staffing advice derived from a [`SimulationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRecommendation {
    /// Whole operators to put on the line.
    pub headcount: u64,
    /// Change relative to the current crew.
    #[serde(flatten)]
    pub action: StaffingAction,
}
