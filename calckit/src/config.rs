//! Toolkit configuration file support.
//!
//! Reads the optional `calckit.toml`:
//!
//! ```toml
//! [limits]
//! max_factorial = 5000
//! max_factorization = 1000000000000
//!
//! [expression]
//! angle_mode = "degrees"
//!
//! [display]
//! precision = 6
//! ```
//!
//! Every key is optional and falls back to its default.

use crate::expr::AngleMode;
use crate::numtheory::Limits;
use crate::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name searched for by [`ToolkitConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "calckit.toml";

/// Most decimal places worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Toolkit configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub expression: ExpressionSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Expression evaluator settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpressionSettings {
    #[serde(default)]
    pub angle_mode: AngleMode,
}

/// Output formatting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Decimal places for floating-point results.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    6
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl ToolkitConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ToolkitConfig)` if successful
    /// * `Err(CalcError::Configuration)` if the file cannot be read, parsed or holds out-of-range values
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CalcError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: ToolkitConfig = content.parse()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `calckit.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(ToolkitConfig)` if found and parsed successfully
    /// * `Err(CalcError::Configuration)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self> {
        match Self::find_default() {
            Some(path) => Self::from_file(path),
            None => Err(CalcError::configuration(format!(
                "No {CONFIG_FILE_NAME} found in standard locations"
            ))),
        }
    }

    /// First existing file among the locations searched by [`ToolkitConfig::from_default_location`].
    pub fn find_default() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("config").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;
        if self.display.precision > MAX_PRECISION {
            return Err(CalcError::configuration(format!(
                "display.precision must be at most {MAX_PRECISION}, found {}",
                self.display.precision
            )));
        }
        Ok(())
    }
}

impl FromStr for ToolkitConfig {
    type Err = CalcError;

    /// Parses TOML text and validates it.
    fn from_str(s: &str) -> Result<Self> {
        let config: ToolkitConfig = toml::from_str(s).map_err(|e| {
            CalcError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
