//! Optional configuration file for suntime.
//!
//! The configuration file is looked up at:
//! 1. **$SUNTIME_CONFIG**, when set
//! 2. **XDG_CONFIG_HOME**/suntime/suntime.toml (or the platform equivalent)
//!
//! It is never created automatically. A missing file means defaults.
//!
//! ```toml
//! debug = false                  # same as --debug
//! utc = false                    # same as --utc
//!
//! [locations]                    # names usable in place of coordinates
//! nyc = "+404246-0740022"
//! sydney = "-3352+15113"
//! ```
//!
//! Every alias must hold a valid ISO 6709 location; a file with a bad alias is
//! rejected as a whole.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::{Location, LocationError, parse_location};
use crate::logger::Log;

/// Settings loaded from `suntime.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Enable diagnostic output on stderr.
    pub debug: bool,
    /// Print times in UTC rather than the local time zone.
    pub utc: bool,
    /// Location aliases, name to ISO 6709 coordinate string.
    pub locations: BTreeMap<String, String>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load and validate the configuration at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        validate_config(&config)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Load the configuration from its default location, or defaults if the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Like [`Config::load`], but a broken configuration only produces a
    /// warning and the defaults are used instead.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                Log::log_warning(&format!("{:#}; using defaults", e));
                Self::default()
            }
        }
    }

    /// Turn a command-line location argument into a location, trying alias
    /// names before coordinate strings.
    pub fn resolve_location(&self, arg: &str) -> Result<Location, LocationError> {
        match self.locations.get(arg) {
            Some(coords) => parse_location(coords),
            None => parse_location(arg),
        }
    }

    /// Log the active configuration to the debug trace.
    pub fn log_config(&self) {
        Log::log_decorated("Loaded configuration");
        Log::log_indented(&format!("Debug: {}", self.debug));
        Log::log_indented(&format!("UTC output: {}", self.utc));
        if self.locations.is_empty() {
            Log::log_indented("Location aliases: none");
        } else {
            Log::log_indented("Location aliases:");
            for (name, coords) in &self.locations {
                Log::log_indented(&format!("  {} = {}", name, coords));
            }
        }
    }
}

/// Check every location alias.
pub fn validate_config(config: &Config) -> Result<()> {
    for (name, coords) in &config.locations {
        if name.is_empty() {
            anyhow::bail!("Location alias names must not be empty");
        }
        parse_location(coords)
            .with_context(|| format!("Location alias '{}' has bad coords '{}'", name, coords))?;
    }
    Ok(())
}
