//! Application state for the line capacity planner API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the plant reference data, loaded once at startup and only read
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    plant: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state around the loaded plant data.
    pub fn new(plant: ConfigLoader) -> Self {
        Self {
            plant: Arc::new(plant),
        }
    }

    /// Returns the plant reference data.
    pub fn plant(&self) -> &ConfigLoader {
        &self.plant
    }
}
