//! Configuration loading for the dashboard.
//! Reads spacex-dash.toml from the current directory or the path in SPACEX_DASH_CONFIG.
//! Every field has a default, so running without a config file is valid.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::error::{DashError, Result};

/// Public course-data copy of the launch dataset.
pub const DEFAULT_DATA_SOURCE: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

pub const CONFIG_ENV_VAR: &str = "SPACEX_DASH_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "spacex-dash.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8050 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// URL (http/https) or local file path of the launch CSV.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_source()          -> String { DEFAULT_DATA_SOURCE.to_string() }
fn default_request_timeout() -> u64    { 30 }

impl Default for DataConfig {
    fn default() -> Self {
        Self { source: default_source(), request_timeout_secs: default_request_timeout() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Fallback tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "info".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

impl Config {
    /// Load configuration.
    /// Checks SPACEX_DASH_CONFIG first, then spacex-dash.toml. A missing
    /// default file means defaults; a missing file named by the env var is an error.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DashError::Config(format!("Config file not found: {}", path.display())));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DashError::Config(e.to_string()))
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            DashError::Config(format!("Invalid server host: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
