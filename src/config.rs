mod general;
mod paths;
mod playback;


use std::{fs, path::Path};

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use playback::PlaybackConfig;
use serde::{Deserialize, Serialize};

use crate::core::{Result, VoxcueError};

/// Main configuration structure for Voxcue.
///
/// Contains all configuration settings including general settings
/// and playback behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Playback behavior settings.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    /// Load the main configuration file, falling back to defaults when
    /// no file exists.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&ConfigPaths::main_config())
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file is not an error; defaults are returned instead so a
    /// fresh install works without any setup.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| VoxcueError::toml_parse(e, Some(path)))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.playback.default_volume) {
            return Err(VoxcueError::Config(format!(
                "playback.default_volume must be within [0, 1], got {}",
                self.playback.default_volume
            )));
        }

        if self.playback.skip_step_secs <= 0.0 {
            return Err(VoxcueError::Config(format!(
                "playback.skip_step_secs must be positive, got {}",
                self.playback.skip_step_secs
            )));
        }

        Ok(())
    }
}
