//! Configuration loaded from environment variables via `envy`.
//!
//! Each field maps to `VDI_<FIELD>`:
//!   - `VDI_PROVIDER_URL`        (required, base URL of the desktop provider API)
//!   - `VDI_PROVIDER_TOKEN`      (optional, bearer token passed through as-is)
//!   - `VDI_CATALOG_URL`         (required, MySQL DSN for the action catalog)
//!   - `VDI_HTTP_TIMEOUT_SECS`   (default 30)

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the virtual desktop provider API.
    pub provider_url: String,

    /// Bearer token for the provider API.
    pub provider_token: Option<String>,

    /// MySQL DSN of the action catalog store.
    pub catalog_url: String,

    /// Per-request timeout for provider calls, in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from `VDI_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming the prefix when a required variable is missing
    /// or unparsable.
    pub fn from_env() -> Result<Self> {
        envy::prefixed("VDI_")
            .from_env()
            .context("loading VDI_-prefixed configuration from the environment")
    }
}
