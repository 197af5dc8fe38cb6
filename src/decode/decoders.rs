//! Generic decode functions

use super::types::RawResponse;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Decode a raw response body into `T`
///
/// Missing required fields, type mismatches and invalid JSON all fail
/// with [`Error::Decode`]; nothing is defaulted silently unless `T`
/// says so.
pub fn extract_into<T: DeserializeOwned>(raw: &RawResponse) -> Result<T> {
    serde_json::from_slice(&raw.body).map_err(|e| {
        debug!(url = %raw.url, error = %e, "Failed to decode response body");
        Error::decode(format!("Failed to parse JSON from {}: {e}", raw.url))
    })
}

/// Decode a raw response body into an untyped JSON value
pub fn extract_value(raw: &RawResponse) -> Result<Value> {
    extract_into(raw)
}
