//! HTTP client for the container engine API.
//!
//! Every request carries the client identity headers merged with the custom
//! headers loaded from the config file at startup.

mod types;

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::headers::{HeaderSet, build_headers};

pub use types::{ContainerSummary, ServerVersion};

/// Everything the client needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub host: String,
    pub timeout_secs: u64,
    pub configured_headers: HeaderSet,
}

#[async_trait]
pub trait EngineApi: Send + Sync {
    async fn ping(&self) -> Result<String>;

    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>>;

    async fn server_version(&self) -> Result<ServerVersion>;
}

pub type DynEngineApi = dyn EngineApi;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    mandatory: HeaderSet,
    configured: HeaderSet,
}

impl ApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let base_url = normalize_host(&settings.host)?;

        let timeout = Duration::from_secs(settings.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            mandatory: HeaderSet::mandatory(),
            configured: settings.configured_headers,
        })
    }

    /// Headers for the next request.
    pub fn request_headers(&self) -> HeaderSet {
        build_headers(&self.mandatory, &self.configured)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.get(url).headers(self.request_headers().to_header_map())
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {endpoint} at {}", self.base_url))?;

        let status = response.status();
        tracing::debug!(endpoint, %status, "engine responded");

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(anyhow!(
                "Engine endpoint {endpoint} not found (is {} a container engine?)",
                self.base_url
            )),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow!(
                "Engine rejected the request (status {status}). Check HttpHeaders in your config file."
            )),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => Err(anyhow!(
                "Engine is unavailable (status {status}): {}",
                error_text.trim()
            )),
            status => Err(anyhow!(
                "Engine API error (status {status}): {}",
                error_text.trim()
            )),
        }
    }
}

#[async_trait]
impl EngineApi for ApiClient {
    async fn ping(&self) -> Result<String> {
        let response = self.send(self.get("/_ping"), "/_ping").await?;
        response
            .text()
            .await
            .context("Failed to read ping response body")
    }

    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerSummary>> {
        let mut request = self.get("/containers/json");
        if all {
            request = request.query(&[("all", "1")]);
        }
        let response = self.send(request, "/containers/json").await?;
        response
            .json::<Vec<ContainerSummary>>()
            .await
            .context("Failed to parse container list JSON")
    }

    async fn server_version(&self) -> Result<ServerVersion> {
        let response = self.send(self.get("/version"), "/version").await?;
        response
            .json::<ServerVersion>()
            .await
            .context("Failed to parse version response JSON")
    }
}

/// Turns a `-H` style address into an HTTP base URL.
///
/// Accepts `tcp://host:port`, `http(s)://...` and bare `host:port`.
pub fn normalize_host(host: &str) -> Result<String> {
    let host = host.trim();
    if host.is_empty() {
        bail!("Engine host cannot be empty");
    }

    let (scheme, address) = if let Some(rest) = host.strip_prefix("tcp://") {
        ("http", rest)
    } else if let Some(rest) = host.strip_prefix("http://") {
        ("http", rest)
    } else if let Some(rest) = host.strip_prefix("https://") {
        ("https", rest)
    } else if let Some((scheme, _)) = host.split_once("://") {
        bail!("Unsupported engine host scheme '{scheme}://'; use tcp://, http:// or https://");
    } else {
        ("http", host)
    };

    let address = address.trim_end_matches('/');
    if address.is_empty() {
        bail!("Engine host '{host}' has no address");
    }
    Ok(format!("{scheme}://{address}"))
}

#[cfg(test)]
mod tests;
