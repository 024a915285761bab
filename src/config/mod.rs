//! Plant reference data for the line capacity planner.
//!
//! This module loads the model catalog and default shift schedule from YAML
//! files. The calculators never read or write configuration themselves; the
//! loaded values are handed to them by the caller.
//!
//! # Example
//!
//! ```no_run
//! use line_planner::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/plant").unwrap();
//! println!("Loaded plant: {}", config.plant().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ModelsConfig, PlantConfig, PlantMetadata};
