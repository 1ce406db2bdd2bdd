// File: src/config.rs
// Purpose: Configuration parsing from crewdesk.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub services: ServicesConfig,
}

/// Dashboard HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Base URLs of the two backend microservices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_employees_url")]
    pub employees_url: String,

    #[serde(default = "default_attendance_url")]
    pub attendance_url: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_employees_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_attendance_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            employees_url: default_employees_url(),
            attendance_url: default_attendance_url(),
        }
    }
}

impl Config {
    /// Load configuration from a crewdesk.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./crewdesk.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("crewdesk.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.services.employees_url, "http://localhost:8000");
        assert_eq!(config.services.attendance_url, "http://localhost:8000");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [services]
            attendance_url = "http://localhost:8001"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.services.employees_url, "http://localhost:8000");
        assert_eq!(config.services.attendance_url, "http://localhost:8001");
        assert_eq!(config.server.port, 5000);
    }
}
