//! Configuration
//!
//! All environment reads happen here, once per invocation, and are collected
//! into a single `DocConfig` value that the rest of the crate receives as an
//! explicit parameter. An optional `docsmith.toml` overlays the environment.

use crate::completion::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved configuration for one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocConfig {
    /// Completion-backed generation toggle (`OPENAI_ENABLED`)
    pub enabled: bool,
    /// Credential for the completion service (`OPENAI_API_KEY`)
    pub api_key: Option<String>,
    /// Completion model identifier
    pub model: String,
    /// Completion endpoint base URL
    pub base_url: String,
    /// Bound on the synchronous wait for a completion response
    pub timeout_secs: u64,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// On-disk overlay; every field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub enabled: Option<bool>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("docsmith.toml")
}

/// Load the config file if present.
pub fn load_config_file(path: Option<&Path>) -> anyhow::Result<Option<ConfigFile>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(Some(config))
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl DocConfig {
    /// Read the environment once into a config value.
    pub fn from_env() -> Self {
        Self {
            enabled: env_flag("OPENAI_ENABLED"),
            api_key: env_string("OPENAI_API_KEY"),
            model: env_string("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: env_string("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_secs: 30,
        }
    }

    /// Overlay file values on top of this config.
    pub fn apply_file(mut self, file: ConfigFile) -> Self {
        if let Some(enabled) = file.enabled {
            self.enabled = enabled;
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(timeout_secs) = file.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    /// Timeout for the blocking completion call
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The credential, or the construction-time failure the completion path
    /// requires when it is absent.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DocConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_apply_file_overlays_only_present_fields() {
        let file = ConfigFile {
            model: Some("text-davinci-003".to_string()),
            timeout_secs: Some(5),
            ..Default::default()
        };

        let config = DocConfig::default().apply_file(file);
        assert_eq!(config.model, "text-davinci-003");
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.enabled);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_require_api_key() {
        let mut config = DocConfig::default();
        assert!(matches!(config.require_api_key(), Err(Error::MissingCredential)));

        config.api_key = Some("  ".to_string());
        assert!(matches!(config.require_api_key(), Err(Error::MissingCredential)));

        config.api_key = Some("sk-test".to_string());
        assert_eq!(config.require_api_key().unwrap(), "sk-test");
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enabled = true\nmodel = \"text-davinci-003\"").unwrap();

        let loaded = load_config_file(Some(file.path())).unwrap().unwrap();
        assert_eq!(loaded.enabled, Some(true));
        assert_eq!(loaded.model.as_deref(), Some("text-davinci-003"));
        assert!(loaded.base_url.is_none());
    }

    #[test]
    fn test_missing_config_file_is_none() {
        let loaded = load_config_file(Some(Path::new("/nonexistent/docsmith.toml"))).unwrap();
        assert!(loaded.is_none());
    }
}
