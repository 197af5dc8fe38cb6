//! Raw response types

use bytes::Bytes;

/// A response body exactly as the transport delivered it
///
/// Holds the final request URL and status alongside the bytes so that
/// pages can be traced back to where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// URL the body was fetched from
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Unparsed response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a raw response
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a 200 response from a JSON value (mostly useful in tests)
    pub fn from_json(url: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::new(url, 200, value.to_string())
    }

    /// Check if the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Check if the body is empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
