//! Motorcycle model and production line types.
//!
//! This module defines the [`MotorcycleModel`] reference record and the
//! closed [`LineName`] enumeration of assembly lines.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The assembly lines a model can be built on.
///
/// # Example
///
/// ```
/// use line_planner::models::LineName;
///
/// assert_eq!(LineName::L1Ctg.to_string(), "L1 CTG");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineName {
    /// Assembly line 1.
    #[serde(rename = "L1 CTG")]
    L1Ctg,
    /// Assembly line 2.
    #[serde(rename = "L2 CTG")]
    L2Ctg,
}

impl LineName {
    /// All lines, in display order.
    pub const ALL: [LineName; 2] = [LineName::L1Ctg, LineName::L2Ctg];

    /// Returns the display label of the line.
    pub fn label(&self) -> &'static str {
        match self {
            LineName::L1Ctg => "L1 CTG",
            LineName::L2Ctg => "L2 CTG",
        }
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A motorcycle model as it is built on one assembly line.
///
/// Reference data: loaded from configuration and never mutated by the
/// calculators.
///
/// # Example
///
/// ```
/// use line_planner::models::{LineName, MotorcycleModel};
/// use rust_decimal::Decimal;
///
/// let model = MotorcycleModel {
///     id: "nkd-125".to_string(),
///     name: "NKD 125".to_string(),
///     max_cadence: Decimal::new(32, 0),
///     work_content: Decimal::new(25, 1),
///     line: LineName::L1Ctg,
/// };
/// assert_eq!(model.work_content, Decimal::new(25, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorcycleModel {
    /// Unique identifier of the model.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Highest cadence ever sustained, in units per hour. Informational only.
    pub max_cadence: Decimal,
    /// Labor minutes required per unit on this line.
    pub work_content: Decimal,
    /// The line the model is assembled on.
    pub line: LineName,
}

impl MotorcycleModel {
    /// Returns true if the model is assembled on the given line.
    pub fn is_on_line(&self, line: LineName) -> bool {
        self.line == line
    }
}
