//! Configuration loading
//!
//! Settings resolve in this order (highest priority first):
//! 1. Command-line arguments (applied by the binary via [`ConfigOverrides`])
//! 2. Config file named by `--config` or the `DINO_CONFIG` environment variable
//! 3. `~/.config/dino-compare/config.toml`
//! 4. Compiled defaults
//!
//! A missing config file is not an error; a malformed one is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "DINO_CONFIG";

/// Default HTTP port for dino-ui
pub const DEFAULT_PORT: u16 = 5780;

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TomlConfig {
    /// Dino data file (JSON)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory served under `/images`
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            images_dir: default_images_dir(),
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("dino.json")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values supplied on the command line; `None` leaves the file value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_file: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub port: Option<u16>,
}

impl TomlConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Resolve the config file and load it, falling back to defaults when
    /// no file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Some(path) => {
                warn!(
                    "Config file {} not found, using compiled defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                info!("No config file found, using compiled defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(data_file) = overrides.data_file {
            self.data_file = data_file;
        }
        if let Some(images_dir) = overrides.images_dir {
            self.images_dir = images_dir;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        self
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pick the config file path: explicit argument, then environment variable,
/// then the per-user config file when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    user_config_path().filter(|path| path.exists())
}

/// `~/.config/dino-compare/config.toml` (platform equivalent elsewhere)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dino-compare").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TomlConfig::default();
        assert_eq!(config.data_file, PathBuf::from("dino.json"));
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bind_address(), "127.0.0.1:5780");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TomlConfig = toml::from_str("port = 8080\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from("dino.json"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides_take_priority() {
        let config = TomlConfig::default().with_overrides(ConfigOverrides {
            data_file: Some(PathBuf::from("/srv/dinos.json")),
            images_dir: None,
            port: Some(9000),
        });
        assert_eq!(config.data_file, PathBuf::from("/srv/dinos.json"));
        assert_eq!(config.images_dir, PathBuf::from("images"));
        assert_eq!(config.port, 9000);
    }
}
