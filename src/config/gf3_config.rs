// src/config/gf3_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;
use crate::polynomial::format::DEFAULT_MAX_INPUT_DEGREE;

/// Driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gf3Config {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Variable name used in the expression form
    pub variable_name: String,

    /// Largest degree accepted from brace-format input
    pub max_input_degree: usize,
}

impl Default for Gf3Config {
    fn default() -> Self {
        Gf3Config {
            log_level: "info".to_string(),
            variable_name: "x".to_string(),
            max_input_degree: DEFAULT_MAX_INPUT_DEGREE,
        }
    }
}

impl Gf3Config {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("gf3poly.toml").exists() {
            builder = builder.add_source(File::with_name("gf3poly.toml"));
        } else if Path::new("gf3poly.yaml").exists() {
            builder = builder.add_source(File::with_name("gf3poly.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("variable_name", "x")?
            .set_default("max_input_degree", DEFAULT_MAX_INPUT_DEGREE as u64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // GF3POLY_LOG_LEVEL, GF3POLY_VARIABLE_NAME, GF3POLY_MAX_INPUT_DEGREE
        let config = builder
            .add_source(
                Environment::with_prefix("GF3POLY")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
