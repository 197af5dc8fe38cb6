//! In-memory transport

use super::transport::Transport;
use crate::decode::RawResponse;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned responses keyed by URL
///
/// Unknown URLs answer 404. Every request is recorded so tests can assert
/// on the order of fetches.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    responses: HashMap<String, (u16, String)>,
    requests: Mutex<Vec<String>>,
}

impl MemoryTransport {
    /// Create an empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a 200 and the given JSON body
    #[must_use]
    pub fn with_json(self, url: impl Into<String>, body: Value) -> Self {
        self.with_response(url, 200, body.to_string())
    }

    /// Answer `url` with an arbitrary status and body
    #[must_use]
    pub fn with_response(
        mut self,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.responses.insert(url.into(), (status, body.into()));
        self
    }

    /// Requests seen so far, as `METHOD url`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn respond(&self, method: &str, url: &str) -> Result<RawResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(format!("{method} {url}"));
        }

        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| (404, String::new()));

        if (200..300).contains(&status) {
            Ok(RawResponse::new(url, status, body))
        } else {
            Err(Error::http_status(status, body))
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.respond("GET", url)
    }

    async fn delete(&self, url: &str) -> Result<RawResponse> {
        self.respond("DELETE", url)
    }
}
