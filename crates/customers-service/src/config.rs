//! # Service Configuration
//!
//! Defaults, overlaid by an optional TOML file, overlaid by environment variables:
//!
//! | Setting | TOML key | Environment | Default |
//! |---------|----------|-------------|---------|
//! | Listen address | `bind_addr` | `CUSTOMERS_BIND_ADDR` | `0.0.0.0:8081` |
//! | Actor mailbox size | `actor_buffer` | `CUSTOMERS_ACTOR_BUFFER` | `32` |
//! | Load clinic sample data | `seed_data` | `CUSTOMERS_SEED_DATA` | `true` |
//!
//! The TOML file is read only when `CUSTOMERS_CONFIG` names one.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "CUSTOMERS_CONFIG";
pub const BIND_ADDR_VAR: &str = "CUSTOMERS_BIND_ADDR";
pub const ACTOR_BUFFER_VAR: &str = "CUSTOMERS_ACTOR_BUFFER";
pub const SEED_DATA_VAR: &str = "CUSTOMERS_SEED_DATA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub actor_buffer: usize,
    pub seed_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8081)),
            actor_buffer: 32,
            seed_data: true,
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Loads configuration, reading variables through `lookup`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::load_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(content)?;
        config.validate()
    }

    fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(BIND_ADDR_VAR) {
            self.bind_addr = parse_var(BIND_ADDR_VAR, value)?;
        }
        if let Some(value) = lookup(ACTOR_BUFFER_VAR) {
            self.actor_buffer = parse_var(ACTOR_BUFFER_VAR, value)?;
        }
        if let Some(value) = lookup(SEED_DATA_VAR) {
            self.seed_data = parse_var(SEED_DATA_VAR, value)?;
        }
        self.validate()
    }

    // tokio channels panic on a zero capacity
    fn validate(self) -> Result<Self, ConfigError> {
        if self.actor_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: "actor_buffer",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServiceConfig::load_with(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8081");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServiceConfig::from_toml_str("seed_data = false\n").unwrap();
        assert!(!config.seed_data);
        assert_eq!(config.actor_buffer, 32);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ServiceConfig::load_with(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (ACTOR_BUFFER_VAR, "64"),
            (SEED_DATA_VAR, "false"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.actor_buffer, 64);
        assert!(!config.seed_data);
    }

    #[test]
    fn test_file_then_environment() {
        let path = env::temp_dir().join(format!("customers-config-{}.toml", std::process::id()));
        fs::write(&path, "bind_addr = \"127.0.0.1:7000\"\nactor_buffer = 8\n").unwrap();

        let config = ServiceConfig::load_with(lookup(&[
            (CONFIG_PATH_VAR, path.to_str().unwrap()),
            (ACTOR_BUFFER_VAR, "16"),
        ]))
        .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.bind_addr.port(), 7000);
        assert_eq!(config.actor_buffer, 16);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ServiceConfig::load_with(lookup(&[(ACTOR_BUFFER_VAR, "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: ACTOR_BUFFER_VAR, .. }
        ));

        let err = ServiceConfig::from_toml_str("actor_buffer = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        assert!(matches!(
            ServiceConfig::from_toml_str("actor_buffer = \"x\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ServiceConfig::load_file(Path::new("/nonexistent/customers.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/customers.toml"));
    }
}
