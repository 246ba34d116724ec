//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "stage_races=info,tower_http=info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid STAGE_RACE_API_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the external stage-race API, without trailing `/`.
    pub api_url: String,
    pub api_timeout_secs: u64,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STAGE_RACE_API_URL`: default `http://127.0.0.1:8080`
    /// - `STAGE_RACE_API_TIMEOUT_SECS`: default 10
    /// - `RUST_LOG`: default `stage_races=info,tower_http=info`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_url = lookup("STAGE_RACE_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let api_timeout_secs = match lookup("STAGE_RACE_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };
        let log_filter = lookup("RUST_LOG")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        Ok(Self { port, api_url, api_timeout_secs, log_filter })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
