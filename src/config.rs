//! Configuration handling for visitor-shapes
//!
//! Configuration is read from the file named by `--config` (or the
//! `SHAPES_CONFIG` environment variable), falling back to
//! `~/.config/shapes/config.toml` (platform equivalent). A missing file means
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::ShapeKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Dimensions used when input names a shape kind without dimensions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DefaultDimensions {
    pub circle_radius: f64,
    pub square_side: f64,
    pub triangle_base: f64,
    pub triangle_height: f64,
}

impl Default for DefaultDimensions {
    fn default() -> Self {
        Self {
            circle_radius: 30.0,
            square_side: 40.0,
            triangle_base: 60.0,
            triangle_height: 40.0,
        }
    }
}

impl DefaultDimensions {
    /// Returns the default dimensions for a kind, in constructor order
    pub fn for_kind(&self, kind: ShapeKind) -> Vec<f64> {
        match kind {
            ShapeKind::Circle => vec![self.circle_radius],
            ShapeKind::Square => vec![self.square_side],
            ShapeKind::Triangle => vec![self.triangle_base, self.triangle_height],
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("circle_radius", self.circle_radius),
            ("square_side", self.square_side),
            ("triangle_base", self.triangle_base),
            ("triangle_height", self.triangle_height),
        ];

        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "defaults.{} must be a positive number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output format when `--format` is not given
    pub default_format: OutputFormat,

    /// Start sessions (and argument-less `total`) from the demo shapes
    pub preload_demo: bool,

    /// Prefix activity log lines with the local time
    pub timestamps: bool,

    /// Default dimensions for new shapes
    pub defaults: DefaultDimensions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            preload_demo: true,
            timestamps: true,
            defaults: DefaultDimensions::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "visitor-shapes", "shapes")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads and validates a specific config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses and validates config text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.defaults.validate()?;
        Ok(config)
    }
}
