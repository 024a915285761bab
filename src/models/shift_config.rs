//! Shift configuration model.
//!
//! This module defines the [`ShiftConfig`] and [`BreakSchedule`] structs that
//! describe one working day on the line.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Format used for wall-clock shift times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Working days per month assumed when configuration omits the value.
pub const DEFAULT_WORKING_DAYS_PER_MONTH: u32 = 24;

/// The three scheduled stops of a shift, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakSchedule {
    /// Morning break.
    pub am: u32,
    /// Lunch break.
    pub lunch: u32,
    /// Afternoon break.
    pub pm: u32,
}

impl BreakSchedule {
    /// Returns the combined length of all breaks in minutes.
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.am) + i64::from(self.lunch) + i64::from(self.pm)
    }
}

/// A daily shift schedule.
///
/// Callers replace the whole value when any field changes.
///
/// # Example
///
/// ```
/// use line_planner::models::{BreakSchedule, ShiftConfig};
///
/// let shift = ShiftConfig::parse(
///     "06:00",
///     "14:00",
///     BreakSchedule { am: 10, lunch: 30, pm: 10 },
///     24,
/// )?;
/// assert_eq!(shift.start_minute_of_day(), 360);
/// # Ok::<(), line_planner::error::PlannerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Shift start, serialized as `HH:mm`.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Shift end, serialized as `HH:mm`. May be earlier than the start for
    /// overnight shifts.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Scheduled breaks.
    pub breaks: BreakSchedule,
    /// Working days in a month.
    #[serde(default = "default_working_days")]
    pub working_days_per_month: u32,
}

fn default_working_days() -> u32 {
    DEFAULT_WORKING_DAYS_PER_MONTH
}

impl ShiftConfig {
    /// Builds a shift from `HH:mm` strings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTime` if either time is not a valid `HH:mm` value.
    pub fn parse(
        start_time: &str,
        end_time: &str,
        breaks: BreakSchedule,
        working_days_per_month: u32,
    ) -> PlannerResult<Self> {
        Ok(Self {
            start_time: parse_time(start_time)?,
            end_time: parse_time(end_time)?,
            breaks,
            working_days_per_month,
        })
    }

    /// Minutes since midnight at which the shift starts.
    pub fn start_minute_of_day(&self) -> i64 {
        minute_of_day(self.start_time)
    }

    /// Minutes since midnight at which the shift ends.
    pub fn end_minute_of_day(&self) -> i64 {
        minute_of_day(self.end_time)
    }
}

/// Parses a wall-clock time in `HH:mm` form.
pub fn parse_time(value: &str) -> PlannerResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| PlannerError::InvalidTime {
        value: value.to_string(),
    })
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_time(&value).map_err(D::Error::custom)
    }
}
