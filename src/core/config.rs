

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{MedrouteError, Result};


pub const ENV_PREFIX: &str = "MEDROUTE";


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MedrouteConfig {

    pub specialty_radius_km: f64,
    pub government_radius_km: f64,
    pub emergency_radius_km: f64,


    pub max_recommendations: usize,


    pub hospital_catalog_path: Option<PathBuf>,
    pub specialist_catalog_path: Option<PathBuf>,


    pub include_specialist_vocabulary: bool,
}

impl Default for MedrouteConfig {
    fn default() -> Self {
        Self {
            specialty_radius_km: crate::DEFAULT_SPECIALTY_RADIUS_KM,
            government_radius_km: crate::DEFAULT_GOVERNMENT_RADIUS_KM,
            emergency_radius_km: crate::DEFAULT_EMERGENCY_RADIUS_KM,
            max_recommendations: crate::DEFAULT_MAX_RECOMMENDATIONS,
            hospital_catalog_path: None,
            specialist_catalog_path: None,
            include_specialist_vocabulary: true,
        }
    }
}

impl MedrouteConfig {
    /// Layers built-in defaults, an optional config file and `MEDROUTE_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            debug!("Loading configuration file {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }


    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, radius) in [
            ("specialty_radius_km", self.specialty_radius_km),
            ("government_radius_km", self.government_radius_km),
            ("emergency_radius_km", self.emergency_radius_km),
        ] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(MedrouteError::Config(config::ConfigError::Message(format!(
                    "{name} must be positive, got {radius}"
                ))));
            }
        }
        if self.max_recommendations == 0 {
            return Err(MedrouteError::Config(config::ConfigError::Message(
                "max_recommendations must be at least 1".to_string(),
            )));
        }
        Ok(())
    }
}
