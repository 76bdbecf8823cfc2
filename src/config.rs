//! Configuration file support for the HateShield client

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analysis::types::Language;

/// Connection settings for the classification backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Default language hint for new sessions
    #[serde(default)]
    pub language: Language,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_ms() -> u64 {
    30000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            language: Language::default(),
        }
    }
}

impl BackendConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: BackendConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default config file location (`<config dir>/hateshield/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hateshield/config.toml"))
    }

    /// Load the default config file, falling back to defaults when absent
    pub fn load_default() -> Self {
        Self::default_path()
            .filter(|path| path.exists())
            .and_then(|path| Self::from_file(&path).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_backend() {
        let config = BackendConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.language, Language::Auto);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: BackendConfig = toml::from_str(r#"endpoint = "http://analyzer:9000""#).unwrap();
        assert_eq!(config.endpoint, "http://analyzer:9000");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.language, Language::Auto);
    }

    #[test]
    fn language_hint_parses_from_toml() {
        let config: BackendConfig = toml::from_str(r#"language = "hi""#).unwrap();
        assert_eq!(config.language, Language::Hi);
    }
}
