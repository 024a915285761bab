//! Configuration types for plant reference data.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML files of a plant configuration directory.

use serde::{Deserialize, Serialize};

use crate::models::{MotorcycleModel, ShiftConfig};

/// Metadata about the plant the configuration describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantMetadata {
    /// Short plant code (e.g., "CTG").
    pub code: String,
    /// Human-readable plant name.
    pub name: String,
    /// Version or effective date of the reference data.
    pub version: String,
}

/// Model catalog file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelsConfig {
    /// Models in catalog order.
    pub models: Vec<MotorcycleModel>,
}

/// The complete plant configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PlantConfig {
    /// Plant metadata.
    metadata: PlantMetadata,
    /// Model catalog, in file order.
    models: Vec<MotorcycleModel>,
    /// Default shift schedule.
    shift: ShiftConfig,
}

impl PlantConfig {
    /// Creates a new PlantConfig from its component parts.
    pub fn new(metadata: PlantMetadata, models: Vec<MotorcycleModel>, shift: ShiftConfig) -> Self {
        Self {
            metadata,
            models,
            shift,
        }
    }

    /// Returns the plant metadata.
    pub fn plant(&self) -> &PlantMetadata {
        &self.metadata
    }

    /// Returns all models in catalog order.
    pub fn models(&self) -> &[MotorcycleModel] {
        &self.models
    }

    /// Returns the default shift schedule.
    pub fn shift(&self) -> &ShiftConfig {
        &self.shift
    }
}
