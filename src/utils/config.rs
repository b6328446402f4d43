//! Optional TOML configuration: window, logging, and debug tools.
//!
//! Every field has a default, so a file only needs the values it overrides. Scoring and
//! rendering constants are not configurable.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bevy::log::Level;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cube Capture".into(),
            width: 960.0,
            height: 640.0,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    /// Extra `EnvFilter` directives appended to the level.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            filter: "wgpu=error,naga=warn".into(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.level.trim())
            .map_err(|_| ConfigError::Validation(format!("unknown log level '{}'", self.level)))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Enables the V (vsync) and G (alignment gauge) keys.
    pub enabled: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub log: LogConfig,
    pub debug: DebugConfig,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        self.log.level()?;
        Ok(())
    }
}

/// Parses and validates config text.
pub fn parse(content: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Loads config from a TOML file. A missing file is not an error and yields the defaults.
pub fn load_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Loads the config, falling back to the defaults on any error.
///
/// Logging is not up yet when this runs, so the error is handed back for the caller to
/// report later.
pub fn load_or_default(path: &Path) -> (GameConfig, Option<ConfigError>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(e) => (GameConfig::default(), Some(e)),
    }
}
