//! reqwest-backed HTTP client
//!
//! Handles:
//! - Request timeouts
//! - Default headers, including the pre-issued auth token
//! - Classification of failures into transport error variants
//!
//! Retries are deliberately absent; callers decide what to do with a
//! failed request.

use super::transport::Transport;
use crate::decode::RawResponse;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Header carrying a pre-issued identity token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative request paths
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("compute-images/{}", crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send a pre-issued token with every request
    pub fn auth_token(self, token: impl Into<String>) -> Self {
        self.header(AUTH_TOKEN_HEADER, token)
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client implementing [`Transport`]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a request and return the raw response
    ///
    /// Non-2xx statuses come back as [`Error::HttpStatus`] with the body
    /// text attached.
    pub async fn request(&self, method: Method, url: &str) -> Result<RawResponse> {
        let full_url = self.build_url(url);

        let mut req = self.client.request(method.clone(), &full_url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(method = %method, url = %full_url, status = status.as_u16(), "Request failed");
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response.bytes().await?;
        debug!(
            method = %method,
            url = %full_url,
            status = status.as_u16(),
            bytes = body.len(),
            "Request succeeded"
        );

        Ok(RawResponse::new(final_url, status.as_u16(), body))
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.request(Method::GET, url).await
    }

    async fn delete(&self, url: &str) -> Result<RawResponse> {
        self.request(Method::DELETE, url).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Header values may carry the auth token
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}
