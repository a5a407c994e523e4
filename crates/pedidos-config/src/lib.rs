//! Configuration module for the pedidos client.
//!
//! This module provides structures and utilities for managing client
//! configuration. It supports loading configuration from TOML files and
//! provides validation to ensure all required values are properly set.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration for the pedidos client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration for the remote API.
	pub api: ApiConfig,
	/// Configuration for the reference data cache.
	#[serde(default)]
	pub cache: CacheConfig,
}

/// Configuration for the remote API the client talks to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
	/// Base URL of the backend, e.g. `http://localhost:8080/api`.
	pub base_url: String,
	/// Request timeout in seconds. Defaults to 30.
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
	/// Bearer token attached to every request, if already issued.
	#[serde(default)]
	pub token: Option<String>,
}

/// Configuration for the per-session reference data cache.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
	/// Whether the cache is rebuilt every time a composition form
	/// opens. Disabling this keeps a single snapshot per login.
	#[serde(default = "default_refresh_on_open")]
	pub refresh_on_open: bool,
}

impl Default for CacheConfig {
	fn default() -> Self {
		Self {
			refresh_on_open: default_refresh_on_open(),
		}
	}
}

fn default_timeout_secs() -> u64 {
	30
}

fn default_refresh_on_open() -> bool {
	true
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		let config: Config = toml::from_str(&content)?;
		config.validate()?;
		Ok(config)
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.api.base_url.trim().is_empty() {
			return Err(ConfigError::Validation(
				"api.base_url must not be empty".to_string(),
			));
		}
		if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
		{
			return Err(ConfigError::Validation(format!(
				"api.base_url must be an http(s) URL, got '{}'",
				self.api.base_url
			)));
		}
		if self.api.timeout_secs == 0 {
			return Err(ConfigError::Validation(
				"api.timeout_secs must be greater than zero".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	#[test]
	fn loads_minimal_config_with_defaults() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("config.toml");
		fs::write(
			&config_path,
			r#"
[api]
base_url = "http://localhost:8080/api"
"#,
		)
		.unwrap();

		let config = Config::from_file(&config_path).unwrap();
		assert_eq!(config.api.base_url, "http://localhost:8080/api");
		assert_eq!(config.api.timeout_secs, 30);
		assert!(config.api.token.is_none());
		assert!(config.cache.refresh_on_open);
	}

	#[test]
	fn rejects_empty_base_url() {
		let config = Config {
			api: ApiConfig {
				base_url: "  ".to_string(),
				timeout_secs: 30,
				token: None,
			},
			cache: CacheConfig::default(),
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::Validation(_))
		));
	}

	#[test]
	fn rejects_non_http_base_url() {
		let config = Config {
			api: ApiConfig {
				base_url: "localhost:8080".to_string(),
				timeout_secs: 30,
				token: None,
			},
			cache: CacheConfig::default(),
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::Validation(_))
		));
	}
}
