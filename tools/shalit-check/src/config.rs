// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! shalit-check configuration file
//!
//! ```toml
//! reference_digest = "b21e600c4c97bc768f84e7f52b8eb0a8e36310d273e98b96e010703ac33b182f"
//! log_level = "warn"
//! ```

use serde::{Deserialize, Serialize};
use shalit::Digest;
use std::path::Path;
use thiserror::Error;

/// Log levels accepted in a config file
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Checker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Reference digest; the built-in one when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_digest: Option<Digest>,

    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            reference_digest: None,
            log_level: default_log_level(),
        }
    }
}

impl CheckConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Render as a commented TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            r#"# shalit-check configuration
# Generated by shalit-check gen-config
#
# reference_digest: SHA-256 of the expected password, 64 hex digits.
#   Produce one with `shalit-check hash <PASSWORD>`.

{}"#,
            body
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_parse_full_config() {
        let config = CheckConfig::from_toml(&format!(
            "reference_digest = \"{}\"\nlog_level = \"debug\"\n",
            ABC_HEX
        ))
        .unwrap();
        assert_eq!(config.reference_digest, Some(shalit::compute(b"abc")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_defaults() {
        let config = CheckConfig::from_toml("").unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_bad_digest_rejected() {
        let err = CheckConfig::from_toml("reference_digest = \"abcd\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("expected 64 hex digits"));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = CheckConfig::from_toml("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let config = CheckConfig {
            reference_digest: Some(shalit::compute(b"abc")),
            log_level: "info".into(),
        };
        let text = config.to_toml().unwrap();
        assert!(text.starts_with("# shalit-check configuration"));
        assert!(text.contains(ABC_HEX));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        assert_eq!(CheckConfig::from_file(file.path()).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = CheckConfig::from_file("/nonexistent/shalit.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
