use crate::model::connection::{AccessType, Attributes, ConnectionMeta};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dialect: DialectSelection,

    #[serde(default)]
    pub connection: ConnectionMeta,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub messages: Messages,

    /// File the base configuration was read from
    #[serde(skip)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialectSelection {
    #[serde(default = "default_dialect")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// User-facing error text, replaceable for localisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_missing_database")]
    pub missing_database: String,

    #[serde(default = "default_unsupported_access")]
    pub unsupported_access: String,

    #[serde(default = "default_index_check_failed")]
    pub index_check_failed: String,
}

/// Contents of an environment or local overlay file.
///
/// Every value is optional; only what the file sets is applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOverlay {
    #[serde(default)]
    pub dialect: DialectOverlay,

    #[serde(default)]
    pub connection: ConnectionOverlay,

    #[serde(default)]
    pub logging: LoggingOverlay,

    #[serde(default)]
    pub messages: MessagesOverlay,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DialectOverlay {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionOverlay {
    pub name: Option<String>,
    pub access: Option<AccessType>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub database: Option<String>,
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingOverlay {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesOverlay {
    pub missing_database: Option<String>,
    pub unsupported_access: Option<String>,
    pub index_check_failed: Option<String>,
}

// Default values
fn default_dialect() -> String {
    "clickhouse".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_missing_database() -> String {
    "A database name must be specified".to_string()
}
fn default_unsupported_access() -> String {
    "Unsupported database access type".to_string()
}
fn default_index_check_failed() -> String {
    "Unable to determine if indexes exists on table".to_string()
}

impl Default for DialectSelection {
    fn default() -> Self {
        Self {
            name: default_dialect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_database: default_missing_database(),
            unsupported_access: default_unsupported_access(),
            index_check_failed: default_index_check_failed(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment override support
    pub fn load(config_path: Option<&str>, environment: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            config = Self::load_from_file(path)?;
        } else {
            for standard_path in Self::standard_config_paths() {
                if standard_path.exists() {
                    debug!("Loading config from: {}", standard_path.display());
                    config = Self::load_from_file(&standard_path.to_string_lossy())?;
                    break;
                }
            }
        }

        if let Some(env) = environment {
            if let Ok(env_overlay) = Self::load_environment_config(env) {
                debug!("Applying environment config for: {}", env);
                config = config.merge(env_overlay);
            }
        }

        // Local overrides always win
        if let Ok(local_overlay) = Self::load_overlay("config/local.toml") {
            debug!("Applying local config overrides");
            config = config.merge(local_overlay);
        }

        Ok(config)
    }

    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = read_file(path)?;
        let mut config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_string(), e.to_string()))?;
        config.source = Some(path.to_string());
        Ok(config)
    }

    pub fn load_overlay(path: &str) -> Result<ConfigOverlay, ConfigError> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_string(), e.to_string()))
    }

    fn load_environment_config(environment: &str) -> Result<ConfigOverlay, ConfigError> {
        let env_path = format!("config/{}.toml", environment);
        Self::load_overlay(&env_path)
    }

    fn standard_config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("config.toml"),
            PathBuf::from("config/default.toml"),
        ]
    }

    /// Apply an overlay; values it leaves out, and blank connection
    /// strings, keep the current value.
    pub fn merge(mut self, overlay: ConfigOverlay) -> Self {
        set_if_some(&mut self.dialect.name, overlay.dialect.name);

        let conn = overlay.connection;
        set_if_present(&mut self.connection.name, conn.name);
        if let Some(access) = conn.access {
            self.connection.access = access;
        }
        set_if_present(&mut self.connection.host, conn.host);
        set_if_present(&mut self.connection.port, conn.port);
        set_if_present(&mut self.connection.database, conn.database);
        if let Some(attributes) = conn.attributes {
            self.connection.attributes.merge(attributes);
        }

        set_if_some(&mut self.logging.level, overlay.logging.level);

        let messages = overlay.messages;
        set_if_some(&mut self.messages.missing_database, messages.missing_database);
        set_if_some(&mut self.messages.unsupported_access, messages.unsupported_access);
        set_if_some(&mut self.messages.index_check_failed, messages.index_check_failed);

        self
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let toml_content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, toml_content)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))
    }

    pub fn generate_default_config(path: &str) -> Result<(), ConfigError> {
        Config::default().save_to_file(path)
    }
}

fn read_file(path: &str) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))
}

fn set_if_some(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn set_if_present(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(String, String),

    #[error("Failed to write config file '{0}': {1}")]
    FileWrite(String, String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
