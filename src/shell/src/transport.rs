use anyhow::{Context, Result};
use crux_http::protocol::{HttpRequest, HttpResponse};
#[cfg(test)]
use mockall::automock;
use registro_core::BASE_URL;
use reqwest::{Method, blocking::Client};
use std::time::Duration;

use crate::config::ApiConfig;

/// Executes the HTTP effects requested by the core
#[cfg_attr(test, automock)]
pub trait Transport {
    /// Send `request` and return the response, whatever its status.
    ///
    /// Errors are reserved for requests that did not complete.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking reqwest transport against the configured API origin
pub struct ReqwestTransport {
    client: Client,
    api_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.url.clone(),
        })
    }
}

/// Replace the core's placeholder origin with the real API origin
pub fn resolve_url(url: &str, api_url: &str) -> String {
    match url.strip_prefix(BASE_URL) {
        Some(path) => format!("{api_url}{path}"),
        None => url.to_string(),
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = resolve_url(&request.url, &self.api_url);
        let method = Method::from_bytes(request.method.as_bytes())
            .with_context(|| format!("failed to parse HTTP method {}", request.method))?;

        let mut builder = self.client.request(method, &url);
        for header in &request.headers {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder
            .send()
            .with_context(|| format!("failed to send {} {url}", request.method))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .context("failed to read response body")?;

        log::debug!("{} {url} -> {status} ({} bytes)", request.method, body.len());

        Ok(HttpResponse::status(status).body(body.to_vec()).build())
    }
}
