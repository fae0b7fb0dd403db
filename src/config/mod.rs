//! Configuration loading and management
//!
//! Values are resolved in three layers: built-in defaults, then the YAML file
//! named by `BIZDESK_CONFIG` (if set), then individual environment overrides.
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 3000
//! storage:
//!   backend: memory        # or: mongodb
//! mongodb:
//!   uri: mongodb://localhost:27017
//!   database: bizdesk
//! logging:
//!   filter: bizdesk=info,tower_http=info
//! ```

use crate::core::error::{ConfigError, DeskResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_VAR: &str = "BIZDESK_CONFIG";

const HOST_VAR: &str = "BIZDESK_HOST";
const PORT_VAR: &str = "BIZDESK_PORT";
const STORAGE_VAR: &str = "BIZDESK_STORAGE";
const MONGODB_URI_VAR: &str = "BIZDESK_MONGODB_URI";
const MONGODB_DATABASE_VAR: &str = "BIZDESK_MONGODB_DATABASE";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub mongodb: MongoConfig,
    pub logging: LoggingConfig,
}

/// Listening address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Which document store backs the services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Mongodb,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "mongodb" | "mongo" => Ok(Self::Mongodb),
            other => Err(ConfigError::InvalidValue {
                field: "storage.backend".to_string(),
                value: other.to_string(),
                message: "expected 'memory' or 'mongodb'".to_string(),
            }),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Mongodb => f.write_str("mongodb"),
        }
    }
}

/// MongoDB connection settings, used when `storage.backend` is `mongodb`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "bizdesk".to_string(),
        }
    }
}

/// Log filter used when `RUST_LOG` is not set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bizdesk=info,tower_http=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from the process environment
    pub fn load() -> DeskResult<Self> {
        let path = std::env::var(CONFIG_PATH_VAR).ok();
        Self::load_with(path.as_deref().map(Path::new), |key| std::env::var(key).ok())
    }

    /// Resolve the configuration from an optional file and a variable lookup
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> DeskResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> DeskResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: display.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(display),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> DeskResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply `BIZDESK_*` overrides on top of the current values
    pub fn apply_overrides<F>(&mut self, lookup: F) -> DeskResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: PORT_VAR.to_string(),
                value: port.clone(),
                message: "expected a port number".to_string(),
            })?;
        }
        if let Some(backend) = lookup(STORAGE_VAR) {
            self.storage.backend = backend.parse()?;
        }
        if let Some(uri) = lookup(MONGODB_URI_VAR) {
            self.mongodb.uri = uri;
        }
        if let Some(database) = lookup(MONGODB_DATABASE_VAR) {
            self.mongodb.database = database;
        }
        Ok(())
    }

    /// Reject combinations this build cannot serve
    pub fn validate(&self) -> DeskResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                value: self.server.host.clone(),
                message: "must not be empty".to_string(),
            }
            .into());
        }

        if self.storage.backend == StorageBackend::Mongodb {
            if !cfg!(feature = "mongodb_backend") {
                return Err(ConfigError::UnsupportedBackend {
                    backend: self.storage.backend.to_string(),
                }
                .into());
            }
            if self.mongodb.database.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "mongodb.database".to_string(),
                    value: self.mongodb.database.clone(),
                    message: "must not be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
