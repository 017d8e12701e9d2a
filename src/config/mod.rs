//! Configuration management for the fleetlens host surface
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. The analytics engine itself never reads
//! configuration; everything it needs arrives as explicit parameters, which
//! keeps it trivially testable and thread-safe. These settings only shape the
//! hosting surface: where snapshots come from, how search behaves, and how
//! logs are emitted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot data configuration
    pub data: DataConfig,

    /// Live search configuration
    pub search: SearchConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Snapshot data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Default snapshot file consulted when no path is given on the CLI
    pub snapshot_path: PathBuf,
}

/// Live search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum hits returned per entity kind
    pub limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let snapshot_path = std::env::var("FLEETLENS_SNAPSHOT_PATH")
            .unwrap_or_else(|_| String::from("data/snapshot.json"))
            .into();

        let search_limit = std::env::var("FLEETLENS_SEARCH_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(crate::search::DEFAULT_SEARCH_LIMIT);

        let log_level =
            std::env::var("FLEETLENS_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("FLEETLENS_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            data: DataConfig { snapshot_path },
            search: SearchConfig {
                limit: search_limit,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.limit == 0 {
            anyhow::bail!("search limit must be greater than 0");
        }

        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => anyhow::bail!("unknown log format: {other}"),
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                snapshot_path: PathBuf::from("data/snapshot.json"),
            },
            search: SearchConfig {
                limit: crate::search::DEFAULT_SEARCH_LIMIT,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_search_limit_rejected() {
        let mut config = Config::default();
        config.search.limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = String::from("xml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[data]
snapshot_path = "fixtures/records.json"

[search]
limit = 5

[logging]
level = "debug"
format = "json"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.search.limit, 5);
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }
}
