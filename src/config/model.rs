//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the bdm client.
///
/// This struct represents the contents of `bdm.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the document service, including the API prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the bearer token.
    ///
    /// The token itself is never stored in the config file.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Directory where downloaded archives and PDFs are saved.
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            token_env: default_token_env(),
            download_dir: default_download_dir(),
        }
    }
}
