//! Configuration for the composition root.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! lifetime = "singleton"
//!
//! [display]
//! delay_ms = 100
//!
//! [dispatch]
//! mode = "sequential"
//! expected_keys = ["Delay"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::registry::Lifetime;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchyardConfig {
    /// Lifetime applied to every discovered strategy.
    pub lifetime: Lifetime,
    pub display: DisplayConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pause before a message is shown.
    pub delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { delay_ms: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    #[default]
    Sequential,
    Concurrent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub mode: DispatchMode,
    /// Keys that must be registered, checked when the app is built.
    pub expected_keys: Vec<String>,
}

impl SwitchyardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SwitchyardConfig::from_toml_str("").unwrap();
        assert_eq!(config, SwitchyardConfig::default());
        assert_eq!(config.lifetime, Lifetime::Singleton);
        assert_eq!(config.display.delay_ms, 100);
        assert_eq!(config.dispatch.mode, DispatchMode::Sequential);
        assert!(config.dispatch.expected_keys.is_empty());
    }

    #[test]
    fn reads_every_section() {
        let config = SwitchyardConfig::from_toml_str(
            r#"
            lifetime = "transient"

            [display]
            delay_ms = 0

            [dispatch]
            mode = "concurrent"
            expected_keys = ["Delay", "Average"]
            "#,
        )
        .unwrap();

        assert_eq!(config.lifetime, Lifetime::Transient);
        assert_eq!(config.display.delay_ms, 0);
        assert_eq!(config.dispatch.mode, DispatchMode::Concurrent);
        assert_eq!(config.dispatch.expected_keys, vec!["Delay", "Average"]);
    }

    #[test]
    fn rejects_unknown_lifetime() {
        let err = SwitchyardConfig::from_toml_str(r#"lifetime = "forever""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SwitchyardConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
