//! Configuration file management for siriwave.
//!
//! This module handles loading and saving application configuration from TOML files.
//! Configuration is stored in the user's config directory.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use siriwave::Options;
use std::fs;
use std::path::PathBuf;

/// Terminal host settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TerminalConfig {
    /// Drive cycles from presented frames. When false every cycle uses the 20 ms timer.
    #[serde(default = "default_true")]
    pub frame_callbacks: bool,
    /// Speed change per arrow key press
    #[serde(default = "default_speed_step")]
    pub speed_step: f64,
    /// Amplitude change per arrow key press
    #[serde(default = "default_amplitude_step")]
    pub amplitude_step: f64,
}

fn default_true() -> bool {
    true
}

fn default_speed_step() -> f64 {
    0.05
}

fn default_amplitude_step() -> f64 {
    0.25
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            frame_callbacks: true,
            speed_step: default_speed_step(),
            amplitude_step: default_amplitude_step(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiriwaveConfig {
    #[serde(default)]
    pub wave: Options,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl SiriwaveConfig {
    /// Loads configuration from the user's config directory, or defaults if there is none.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file cannot be read
    /// - If the TOML is malformed
    pub fn load() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(&config_path)?;
        Self::parse(&config_content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// - If the TOML is malformed or has values of the wrong type
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!("Invalid configuration: {e}"))
    }

    /// Saves configuration to the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the file cannot be written
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_content = toml::to_string_pretty(self)?;
        fs::write(&config_path, config_content)?;
        tracing::info!("Configuration saved");
        Ok(())
    }
}

/// Retrieves the path to the config file.
///
/// # Errors
/// - If the home directory cannot be determined
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home.join(".config").join("siriwave").join("siriwave.toml"))
}

/// Writes the default configuration if no config file exists yet.
///
/// # Errors
/// - If the config directory cannot be determined or created
/// - If the file cannot be written
pub fn ensure_config_file() -> anyhow::Result<PathBuf> {
    let config_path = get_config_path()?;
    if !config_path.exists() {
        SiriwaveConfig::default().save()?;
        tracing::info!("Default configuration written to {}", config_path.display());
    }
    Ok(config_path)
}
