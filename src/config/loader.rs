//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading plant
//! reference data from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{LineName, MotorcycleModel, ShiftConfig};

use super::types::{ModelsConfig, PlantConfig, PlantMetadata};

/// Loads and provides access to plant reference data.
///
/// # Directory Structure
///
/// ```text
/// config/plant/
/// ├── plant.yaml   # Plant metadata
/// ├── models.yaml  # Model catalog
/// └── shift.yaml   # Default shift schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use line_planner::config::ConfigLoader;
/// use line_planner::models::LineName;
///
/// let loader = ConfigLoader::load("./config/plant")?;
/// for model in loader.models_on_line(LineName::L1Ctg) {
///     println!("{}: {} min/unit", model.name, model.work_content);
/// }
/// # Ok::<(), line_planner::error::PlannerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlantConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or an invalid `HH:mm` time
    /// - A model id is repeated or a model has non-positive work content
    pub fn load<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PlantMetadata>(&path.join("plant.yaml"))?;
        let catalog = Self::load_yaml::<ModelsConfig>(&path.join("models.yaml"))?;
        let shift = Self::load_yaml::<ShiftConfig>(&path.join("shift.yaml"))?;

        Self::validate_models(&catalog.models)?;

        info!(
            plant = %metadata.code,
            version = %metadata.version,
            models = catalog.models.len(),
            "Loaded plant configuration"
        );

        Ok(Self::from_config(PlantConfig::new(
            metadata,
            catalog.models,
            shift,
        )))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PlantConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PlannerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PlannerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PlannerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects catalogs the calculators cannot work with.
    fn validate_models(models: &[MotorcycleModel]) -> PlannerResult<()> {
        let mut seen = HashSet::new();

        for model in models {
            if !seen.insert(model.id.as_str()) {
                return Err(PlannerError::InvalidModel {
                    model_id: model.id.clone(),
                    message: "duplicate model id".to_string(),
                });
            }
            if model.work_content <= Decimal::ZERO {
                return Err(PlannerError::InvalidModel {
                    model_id: model.id.clone(),
                    message: "work content must be positive".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying plant configuration.
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Returns the plant metadata.
    pub fn plant(&self) -> &PlantMetadata {
        self.config.plant()
    }

    /// Returns every model in catalog order.
    pub fn models(&self) -> &[MotorcycleModel] {
        self.config.models()
    }

    /// Returns the configured shift schedule.
    pub fn shift(&self) -> &ShiftConfig {
        self.config.shift()
    }

    /// Gets a model by its id.
    ///
    /// # Returns
    ///
    /// Returns the model if found, or `ModelNotFound` error.
    pub fn get_model(&self, model_id: &str) -> PlannerResult<&MotorcycleModel> {
        self.models()
            .iter()
            .find(|m| m.id == model_id)
            .ok_or_else(|| PlannerError::ModelNotFound {
                model_id: model_id.to_string(),
            })
    }

    /// Returns the models assembled on `line`, in catalog order.
    pub fn models_on_line(&self, line: LineName) -> Vec<&MotorcycleModel> {
        self.models().iter().filter(|m| m.is_on_line(line)).collect()
    }
}
