//! # Session configuration — `session.toml`
//!
//! Controls which state fields survive a restart and how their storage keys are
//! named. A missing or empty file is the default configuration: only
//! `loginState` is persisted, under the bare key `loginState`.
//!
//! ```toml
//! [persist]
//! paths = ["loginState"]   # fields written through to durable storage
//!
//! [storage]
//! namespace = ""           # optional key prefix, "" = bare keys
//! ```
//!
//! With a namespace of `"shop"` the login flag is stored under `shop:loginState`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::StatePath;

/// Top-level configuration stored in `session.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub persist: PersistConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Which fields the persistence step restores and saves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistConfig {
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
}

fn default_paths() -> Vec<String> {
    vec![StatePath::LoginState.as_str().to_string()]
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
        }
    }
}

/// Key naming in the durable store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix for every key. Empty string means keys are the bare path names.
    #[serde(default)]
    pub namespace: String,
}

impl SessionConfig {
    /// Builder method to replace the persisted path list.
    pub fn with_paths(mut self, paths: &[StatePath]) -> Self {
        self.persist.paths = paths.iter().map(|p| p.as_str().to_string()).collect();
        self
    }

    /// Builder method to set the key namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage.namespace = namespace.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "session.toml"
    }

    /// Parse from TOML string. Unknown persisted paths are rejected here.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.persisted_paths()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The persisted path list, validated and deduplicated in declaration order.
    pub fn persisted_paths(&self) -> Result<Vec<StatePath>, ConfigError> {
        let mut paths = Vec::with_capacity(self.persist.paths.len());
        for raw in &self.persist.paths {
            let path: StatePath = raw.parse()?;
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    /// Storage key for a state path.
    pub fn key_for(&self, path: StatePath) -> String {
        if self.storage.namespace.is_empty() {
            path.as_str().to_string()
        } else {
            format!("{}:{}", self.storage.namespace, path.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SessionConfig::from_toml("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.persisted_paths().unwrap(), vec![StatePath::LoginState]);
        assert_eq!(config.key_for(StatePath::LoginState), "loginState");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = SessionConfig::default()
            .with_paths(&[StatePath::LoginState, StatePath::Coupon])
            .with_namespace("shop");

        let text = config.to_toml().unwrap();
        let loaded = SessionConfig::from_toml(&text).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.key_for(StatePath::Coupon), "shop:coupon");
    }

    #[test]
    fn test_unknown_path_rejected() {
        let err = SessionConfig::from_toml("[persist]\npaths = [\"loginState\", \"balance\"]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPath(ref p) if p == "balance"));
    }

    #[test]
    fn test_duplicate_paths_collapse() {
        let config =
            SessionConfig::from_toml("[persist]\npaths = [\"token\", \"loginState\", \"token\"]\n")
                .unwrap();
        assert_eq!(
            config.persisted_paths().unwrap(),
            vec![StatePath::Token, StatePath::LoginState]
        );
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SessionConfig::from_toml("[persist\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
