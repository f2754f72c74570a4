//! Configuration constants and default value functions.

/// File looked up in the current directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "bdm.yaml";

/// Environment variable that overrides `api_base_url`.
pub const API_BASE_URL_ENV: &str = "BDM_API_BASE_URL";

pub fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_token_env() -> String {
    "BDM_TOKEN".to_string()
}

pub fn default_download_dir() -> String {
    ".".to_string()
}
