// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Session configuration
//!
//! Read once when a session starts. Loaded from JSON (string or file) or
//! assembled with the `with_*` builders.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Database every new session starts in
pub const DEFAULT_DATABASE_NAME: &str = "default";

/// Settings a session context is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Route commands through the pluggable authorizer
    pub authorization_mode_enabled: bool,

    /// Eagerly acquire pooled compute resources at session start
    pub prewarm_enabled: bool,

    /// Number of compute units requested when prewarming
    pub prewarm_pool_size: usize,

    /// Database a fresh session points at
    pub default_database: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            authorization_mode_enabled: false,
            prewarm_enabled: false,
            prewarm_pool_size: 0,
            default_database: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authorization_mode(mut self, enabled: bool) -> Self {
        self.authorization_mode_enabled = enabled;
        self
    }

    /// Enable prewarming with the given pool size
    pub fn with_prewarm(mut self, pool_size: usize) -> Self {
        self.prewarm_enabled = true;
        self.prewarm_pool_size = pool_size;
        self
    }

    pub fn with_default_database(mut self, name: impl Into<String>) -> Self {
        self.default_database = name.into();
        self
    }

    /// Parse and validate a JSON document
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading session configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_database.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_database must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Default database with the platform fallback applied
    ///
    /// Configs assembled by hand skip `validate`, so an empty name still has
    /// to resolve to something usable.
    pub fn effective_default_database(&self) -> &str {
        if self.default_database.trim().is_empty() {
            DEFAULT_DATABASE_NAME
        } else {
            &self.default_database
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(!config.authorization_mode_enabled);
        assert!(!config.prewarm_enabled);
        assert_eq!(config.prewarm_pool_size, 0);
        assert_eq!(config.default_database, DEFAULT_DATABASE_NAME);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            SessionConfig::from_json_str(r#"{"authorization_mode_enabled": true}"#).unwrap();
        assert!(config.authorization_mode_enabled);
        assert!(!config.prewarm_enabled);
        assert_eq!(config.default_database, "default");
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "authorization_mode_enabled": true,
            "prewarm_enabled": true,
            "prewarm_pool_size": 4,
            "default_database": "analytics"
        }"#;
        let config = SessionConfig::from_json_str(json).unwrap();
        assert_eq!(
            config,
            SessionConfig::new()
                .with_authorization_mode(true)
                .with_prewarm(4)
                .with_default_database("analytics")
        );
    }

    #[test]
    fn test_empty_default_database_rejected() {
        let result = SessionConfig::from_json_str(r#"{"default_database": ""}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = SessionConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_effective_default_database_fallback() {
        let config = SessionConfig::new().with_default_database("");
        assert_eq!(config.effective_default_database(), DEFAULT_DATABASE_NAME);

        let config = SessionConfig::new().with_default_database("sales");
        assert_eq!(config.effective_default_database(), "sales");
    }
}
