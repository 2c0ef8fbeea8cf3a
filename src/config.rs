//! Engine configuration
//!
//! Which angle-correction policy is authoritative varies by deployment,
//! so it is chosen here, in configuration, along with the crane derating
//! rate and an optional catalog directory to load revised rating tables
//! from.

use crate::capacity::{InputError, SafeLoadCalculator};
use crate::catalog::{CatalogError, CatalogLibrary};
use crate::rigging::AnglePolicy;
use crate::capacity::safe_load::DEFAULT_CRANE_DERATING;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Crane derating rate {0} must be in (0, 1]")]
    InvalidDeratingRate(f64),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error(transparent)]
    InputError(#[from] InputError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sling belt angle-correction policy
    pub angle_policy: AnglePolicy,

    /// Flat margin against the crane load chart figure
    pub crane_derating: f64,

    /// Directory of JSON rating tables; built-in catalogs when absent
    pub catalog_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            angle_policy: AnglePolicy::default(),
            crane_derating: DEFAULT_CRANE_DERATING,
            catalog_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let toml_str = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&toml_str)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.crane_derating > 0.0 && self.crane_derating <= 1.0) {
            return Err(ConfigError::InvalidDeratingRate(self.crane_derating));
        }
        Ok(())
    }
}

impl SafeLoadCalculator {
    /// Build a calculator from an engine configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let catalog = match &config.catalog_dir {
            Some(dir) => CatalogLibrary::from_directory(dir)?,
            None => CatalogLibrary::with_defaults(),
        };

        let calculator = SafeLoadCalculator::new(catalog, config.angle_policy)
            .with_crane_derating(config.crane_derating)?;
        Ok(calculator)
    }
}
