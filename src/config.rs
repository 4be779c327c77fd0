use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Path of the persisted menu document.
    pub data_file: PathBuf,
}

/// Optional YAML config file; every field falls back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    port: Option<u16>,
    data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            port: 3000,
            data_file: data_dir.join("foodstory").join("menus.json"),
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults.
    ///
    /// Environment variables: `FOODSTORY_PORT`, `FOODSTORY_DATA_FILE`, and
    /// `FOODSTORY_CONFIG` for the config file location itself.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            if let Some(port) = file.port {
                config.port = port;
            }
            if let Some(data_file) = file.data_file {
                config.data_file = data_file;
            }
        }

        if let Ok(port) = std::env::var("FOODSTORY_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Ok(data_file) = std::env::var("FOODSTORY_DATA_FILE") {
            config.data_file = PathBuf::from(data_file);
        }

        Ok(config)
    }

    /// Default config file path: `<user config dir>/foodstory/config.yaml`,
    /// overridable with `FOODSTORY_CONFIG`.
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("FOODSTORY_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("foodstory")
            .join("config.yaml")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    ReadError(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config file '{0}': {1}")]
    ParseError(PathBuf, #[source] serde_yaml::Error),
    #[error("Invalid port value '{0}'")]
    InvalidPort(String),
}
