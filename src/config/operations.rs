//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{API_BASE_URL_ENV, DEFAULT_CONFIG_FILE};
use crate::api::ApiConfig;
use crate::error::{BdmError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BdmError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `bdm.yaml` in the current
    /// directory is used when present, otherwise defaults. The
    /// `BDM_API_BASE_URL` environment variable overrides the file.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(API_BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            tracing::debug!(url = %url, "api base url overridden from environment");
            config.api_base_url = url.trim().to_string();
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document parses as unit, not as an empty mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| BdmError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BdmError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `api_base_url` must be an `http://` or `https://` URL
    /// - `timeout_secs` must be positive
    /// - `token_env` must be non-empty
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BdmError::UserError(format!(
                "config validation failed: api_base_url must start with http:// or https:// (found '{}')",
                self.api_base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(BdmError::UserError(
                "config validation failed: timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.token_env.trim().is_empty() {
            return Err(BdmError::UserError(
                "config validation failed: token_env must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Bearer token from the configured environment variable, if set.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    /// Connection settings for the document service.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base_url.trim())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_token(self.token())
    }

    pub fn download_dir(&self) -> PathBuf {
        PathBuf::from(&self.download_dir)
    }
}
