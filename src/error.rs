//! Error types for the line capacity planner.
//!
//! The calculators themselves never fail: they return a value or `None`.
//! These errors cover loading reference data and resolving user selections
//! against it.

use thiserror::Error;

/// The main error type for the line capacity planner.
///
/// # Example
///
/// ```
/// use line_planner::error::PlannerError;
///
/// let error = PlannerError::ConfigNotFound {
///     path: "/missing/models.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/models.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A catalog entry was rejected while loading reference data.
    #[error("Invalid model '{model_id}': {message}")]
    InvalidModel {
        /// The id of the offending model.
        model_id: String,
        /// Why the model was rejected.
        message: String,
    },

    /// No model with the requested id exists in the catalog.
    #[error("Model not found: {model_id}")]
    ModelNotFound {
        /// The id that was looked up.
        model_id: String,
    },

    /// A wall-clock time was not in `HH:mm` form.
    #[error("Invalid time '{value}': expected HH:mm")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },
}

/// A type alias for Results that return PlannerError.
pub type PlannerResult<T> = Result<T, PlannerError>;
