//! Configuration for vigil.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/vigil/config.toml` on Linux). Every key is optional and a
//! missing file means defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::Deserialize;
use vigil_background::SceneSettings;

const CONFIG_FILE: &str = "config.toml";
const MAX_ENTITIES: usize = 10_000;
const MAX_FPS: u32 = 240;

/// Errors from loading or validating a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scene: SceneConfig,
    pub terminal: TerminalConfig,
    pub log: LogConfig,
}

/// What gets drawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub particles: usize,
    pub orbs: usize,
    /// Fixed random seed. A time-derived seed is used when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let defaults = SceneSettings::default();
        Self {
            particles: defaults.particles,
            orbs: defaults.orbs,
            seed: None,
        }
    }
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Frames per second.
    pub fps: u32,
    /// Logical units covered by one half-block pixel.
    pub pixel_size: f64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            pixel_size: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `vigil_background=trace`.
    pub level: String,
    /// Log destination. Logging stays off unless this or `VIGIL_LOG` is set.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vigil").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when there
    /// is no file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.particles > MAX_ENTITIES {
            return Err(ConfigError::Invalid {
                key: "scene.particles",
                reason: format!("must be at most {MAX_ENTITIES}"),
            });
        }
        if self.scene.orbs > MAX_ENTITIES {
            return Err(ConfigError::Invalid {
                key: "scene.orbs",
                reason: format!("must be at most {MAX_ENTITIES}"),
            });
        }
        if !(1..=MAX_FPS).contains(&self.terminal.fps) {
            return Err(ConfigError::Invalid {
                key: "terminal.fps",
                reason: format!("must be between 1 and {MAX_FPS}"),
            });
        }
        if !self.terminal.pixel_size.is_finite() || self.terminal.pixel_size <= 0.0 {
            return Err(ConfigError::Invalid {
                key: "terminal.pixel_size",
                reason: "must be a positive number".to_string(),
            });
        }
        Ok(())
    }

    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            particles: self.scene.particles,
            orbs: self.scene.orbs,
        }
    }
}
