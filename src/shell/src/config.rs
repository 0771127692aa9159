use anyhow::{Context, Result, ensure};
use std::env;

/// Shell configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Authentication API configuration
    pub api: ApiConfig,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Origin the core's relative endpoints are sent to, without trailing `/`
    pub url: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load the configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api = ApiConfig::load(&lookup)?;

        Ok(Self { api })
    }
}

impl ApiConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup("REGISTRO_API_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        ensure!(
            url.starts_with("http://") || url.starts_with("https://"),
            "failed to parse REGISTRO_API_URL: {url} is not an http(s) URL"
        );

        let timeout_secs = lookup("REGISTRO_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("failed to parse REGISTRO_HTTP_TIMEOUT_SECS: invalid format")?;

        Ok(Self { url, timeout_secs })
    }
}
