//! Transport trait

use crate::decode::RawResponse;
use crate::error::Result;
use async_trait::async_trait;

/// Performs requests and hands back raw responses
///
/// Implementations must turn non-2xx statuses into
/// [`Error::HttpStatus`](crate::Error::HttpStatus) and connection problems
/// into the other transport variants, so that every `Ok` carries a
/// successful response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request
    async fn get(&self, url: &str) -> Result<RawResponse>;

    /// Perform a DELETE request
    async fn delete(&self, url: &str) -> Result<RawResponse>;
}
