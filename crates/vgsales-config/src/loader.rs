//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use vgsales_common::Result as VgSalesResult;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "VGSALES_CONFIG_PATH";

/// Files looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["vgsales.yaml", "vgsales.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[source] vgsales_common::VgSalesError),
}

impl From<ConfigError> for vgsales_common::VgSalesError {
    fn from(err: ConfigError) -> Self {
        vgsales_common::VgSalesError::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse YAML text; omitted sections and fields take their defaults.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from the environment variable path, a default file, or defaults
    pub fn load() -> VgSalesResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            return Ok(Self::load_config(config_path)?);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES.iter().map(Path::new).find(|p| p.exists()) {
            return Ok(Self::load_config(path)?);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> VgSalesResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, keyed by environment variable name
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("VGSALES_DATA_PATH") {
            config.data.path = path.into();
        }

        if let Some(dir) = lookup("VGSALES_OUTPUT_DIR") {
            config.output.directory = dir.into();
        }

        if let Some(level) = lookup("VGSALES_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(width) = lookup("VGSALES_GRAPH_WIDTH") {
            config.graphs.width = parse_var("VGSALES_GRAPH_WIDTH", &width)?;
        }

        if let Some(height) = lookup("VGSALES_GRAPH_HEIGHT") {
            config.graphs.height = parse_var("VGSALES_GRAPH_HEIGHT", &height)?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
