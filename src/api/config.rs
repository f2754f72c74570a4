//! Connection settings for the document service.

use crate::error::{BdmError, Result};
use std::time::Duration;

/// Explicit connection settings, built once and handed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:5000/api`.
    pub base_url: String,
    pub timeout: Duration,
    /// Bearer token sent on every request when present.
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Join an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Check that an id is safe to use as a single URL path segment.
pub(crate) fn path_segment(kind: &str, id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(BdmError::UserError(format!("{} id must not be empty", kind)));
    }
    if id.contains(['/', '\\', '?', '#']) || id == "." || id == ".." {
        return Err(BdmError::UserError(format!(
            "invalid {} id '{}': must not contain '/', '\\', '?' or '#'",
            kind, id
        )));
    }
    Ok(id.to_string())
}
