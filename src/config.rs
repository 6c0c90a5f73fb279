//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chart::axis::{FALLBACK_TICK_INTERVAL, NARROW_VIEWPORT_WIDTH};
use crate::chart::TickDensity;
use crate::timeframe::Timeframe;

/// Environment variable overriding `dashboard.default_timeframe`
pub const ENV_TIMEFRAME: &str = "HIRING_INSIGHTS_TIMEFRAME";
/// Environment variable overriding `render.output_dir`
pub const ENV_OUTPUT_DIR: &str = "HIRING_INSIGHTS_OUTPUT_DIR";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "HIRING_INSIGHTS_LOG_LEVEL";
/// Environment variable overriding `logging.format`
pub const ENV_LOG_FORMAT: &str = "HIRING_INSIGHTS_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Window selected on start-up
    #[serde(default)]
    pub default_timeframe: Timeframe,

    /// Surfaces narrower than this get denser date labels
    #[serde(default = "default_narrow_viewport_width")]
    pub narrow_viewport_width: f64,

    /// Tick interval used before the surface width is known
    #[serde(default = "default_fallback_tick_interval")]
    pub fallback_tick_interval: usize,
}

fn default_narrow_viewport_width() -> f64 {
    NARROW_VIEWPORT_WIDTH
}

fn default_fallback_tick_interval() -> usize {
    FALLBACK_TICK_INTERVAL
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_timeframe: Timeframe::default(),
            narrow_viewport_width: default_narrow_viewport_width(),
            fallback_tick_interval: default_fallback_tick_interval(),
        }
    }
}

impl DashboardConfig {
    /// Tick density rules described by this section
    pub fn tick_density(&self) -> TickDensity {
        TickDensity {
            narrow_viewport_width: self.narrow_viewport_width,
            fallback_interval: self.fallback_tick_interval,
        }
    }
}

/// SVG snapshot rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_width() -> u32 {
    1024
}

fn default_height() -> u32 {
    400
}

fn default_output_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("hiring-insights").to_string_lossy().to_string())
        .unwrap_or_else(|| "./hiring_insights_output".to_string())
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Config file locations, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("hiring-insights").join("config.toml")),
            Some(PathBuf::from("./hiring-insights.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TIMEFRAME) {
            match value.parse::<Timeframe>() {
                Ok(tf) => self.dashboard.default_timeframe = tf,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_TIMEFRAME, e),
            }
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.render.output_dir = dir;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            match format.parse::<LogFormat>() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_LOG_FORMAT, e),
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Hiring Insights Configuration
#
# Environment variables override these settings:
# - HIRING_INSIGHTS_TIMEFRAME
# - HIRING_INSIGHTS_OUTPUT_DIR
# - HIRING_INSIGHTS_LOG_LEVEL
# - HIRING_INSIGHTS_LOG_FORMAT

[dashboard]
# Window selected on start-up: 30, 90, 180 or 365 days
default_timeframe = 30

# Surfaces narrower than this (px) label every length/5 days instead of length/10
narrow_viewport_width = 640.0

# Tick interval used before the surface width is known
fallback_tick_interval = 5

[render]
# Snapshot size in pixels
width = 1024
height = 400

# Directory the snapshot binary writes SVG files into
output_dir = "./hiring_insights_output"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.default_timeframe, Timeframe::Last30Days);
        assert_eq!(config.dashboard.narrow_viewport_width, 640.0);
        assert_eq!(config.dashboard.fallback_tick_interval, 5);
        assert_eq!(config.render.width, 1024);
        assert_eq!(config.render.height, 400);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.dashboard.default_timeframe, Timeframe::Last30Days);
        assert_eq!(config.render.output_dir, "./hiring_insights_output");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("[dashboard]\ndefault_timeframe = 180\n").unwrap();
        assert_eq!(config.dashboard.default_timeframe, Timeframe::Last6Months);
        assert_eq!(config.dashboard.fallback_tick_interval, 5);
        assert_eq!(config.render.height, 400);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rejects_unknown_timeframe() {
        let err = Config::parse("[dashboard]\ndefault_timeframe = 45\n").unwrap_err();
        assert!(err.contains("45"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[render]\nwidth = 640\noutput_dir = \"/tmp/out\"\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.render.width, 640);
        assert_eq!(config.render.height, 400);
        assert_eq!(config.render.output_dir, "/tmp/out");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[dashboard\n").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_TIMEFRAME, "365"),
            (ENV_OUTPUT_DIR, "/srv/charts"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FORMAT, "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dashboard.default_timeframe, Timeframe::LastYear);
        assert_eq!(config.render.output_dir, "/srv/charts");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            ENV_TIMEFRAME => Some("7".to_string()),
            ENV_LOG_FORMAT => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.dashboard.default_timeframe, Timeframe::Last30Days);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_tick_density_from_section() {
        let section = DashboardConfig {
            narrow_viewport_width: 800.0,
            fallback_tick_interval: 3,
            ..Default::default()
        };
        let density = section.tick_density();
        assert_eq!(density.interval(90, None), 3);
        assert_eq!(density.interval(90, Some(700.0)), 18);
    }
}
