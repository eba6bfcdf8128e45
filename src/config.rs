//! Configuration System
//!
//! Handles loading configuration from a TOML file with environment variable
//! overrides (`COUNTYSCOPE_*`).

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source file locations, one per (metric, county) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_aqi_suffolk")]
    pub aqi_suffolk: PathBuf,

    #[serde(default = "default_aqi_los_angeles")]
    pub aqi_los_angeles: PathBuf,

    #[serde(default = "default_deaths_suffolk")]
    pub deaths_suffolk: PathBuf,

    #[serde(default = "default_deaths_los_angeles")]
    pub deaths_los_angeles: PathBuf,
}

fn default_aqi_suffolk() -> PathBuf {
    PathBuf::from("data/AQI-BOS.csv")
}

fn default_aqi_los_angeles() -> PathBuf {
    PathBuf::from("data/AQI-LA.csv")
}

fn default_deaths_suffolk() -> PathBuf {
    PathBuf::from("data/BOSInfantDeaths.csv")
}

fn default_deaths_los_angeles() -> PathBuf {
    PathBuf::from("data/InfantDeathsLA.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            aqi_suffolk: default_aqi_suffolk(),
            aqi_los_angeles: default_aqi_los_angeles(),
            deaths_suffolk: default_deaths_suffolk(),
            deaths_los_angeles: default_deaths_los_angeles(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("countyscope").join("config.toml")),
            Some(PathBuf::from("./countyscope.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
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
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("COUNTYSCOPE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("COUNTYSCOPE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(dir) = std::env::var("COUNTYSCOPE_DATA_DIR") {
            let dir = PathBuf::from(dir);
            self.data.aqi_suffolk = dir.join("AQI-BOS.csv");
            self.data.aqi_los_angeles = dir.join("AQI-LA.csv");
            self.data.deaths_suffolk = dir.join("BOSInfantDeaths.csv");
            self.data.deaths_los_angeles = dir.join("InfantDeathsLA.csv");
        }

        if let Ok(level) = std::env::var("COUNTYSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COUNTYSCOPE_LOG_FORMAT") {
            self.logging.format = format;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.data.aqi_suffolk, PathBuf::from("data/AQI-BOS.csv"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [data]
            aqi_suffolk = "elsewhere/aqi.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data.aqi_suffolk, PathBuf::from("elsewhere/aqi.csv"));
        assert_eq!(
            config.data.deaths_los_angeles,
            PathBuf::from("data/InfantDeathsLA.csv")
        );
    }
}
