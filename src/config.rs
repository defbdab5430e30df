//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! clock-config.toml file. It doubles as the persistent settings store for
//! the two watchface options delivered over the settings channel: whenever
//! the channel changes an option, the host writes the whole configuration
//! back so the choice survives a restart.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default configuration file next to the binary.
pub const CONFIG_FILE: &str = "clock-config.toml";

/// Errors that can occur while persisting configuration.
///
/// Loading never fails (missing or invalid files fall back to defaults);
/// only writing the store back reports errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration could not be serialized to TOML
    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be written
    #[error("config write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Application configuration loaded from clock-config.toml
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Canvas and ring dimensions
    pub display: DisplayConfig,
    /// Persisted watchface options
    pub watchface: WatchfaceConfig,
}

/// Canvas and ring geometry configuration
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Radial thickness of each ring in pixels
    pub ring_width: i32,
    /// Margin between rings (and between the outer ring and the canvas edge)
    pub gap: i32,
}

/// The two user-facing display options.
///
/// `seconds_outside` picks which hand owns the outermost ring: seconds
/// outermost and hours innermost when set (the default), swapped when
/// cleared. `invert` flips the final composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WatchfaceConfig {
    /// Invert the final image
    pub invert: bool,
    /// Seconds ring outermost (true) or innermost (false)
    pub seconds_outside: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig {
                width: 144,
                height: 168,
                ring_width: 10,
                gap: 5,
            },
            watchface: WatchfaceConfig::default(),
        }
    }
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        WatchfaceConfig {
            invert: false,
            seconds_outside: true,
        }
    }
}

impl Config {
    /// Load configuration from clock-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    log::info!(
                        "loaded configuration ({}x{} canvas)",
                        config.display.width,
                        config.display.height
                    );
                    config
                }
                Err(e) => {
                    log::warn!("invalid config file format: {}", e);
                    log::warn!("using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to clock-config.toml
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(CONFIG_FILE)
    }

    /// Save current configuration to the specified path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
