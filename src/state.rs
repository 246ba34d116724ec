//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the external stage-race API.

use std::time::Duration;

use crate::config::HostConfig;

/// Shared application state. Clone is required by Axum.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_url: String,
}

impl AppState {
    /// Build the upstream client from config.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config.api_url.clone()))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, api_url: String) -> Self {
        Self { http, api_url }
    }

    /// Absolute upstream URL for `path` (which starts with `/`).
    #[must_use]
    pub fn upstream_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }
}
