//! HTTP transport module
//!
//! The decoding and pagination layers only need one capability from the
//! network: "fetch this URL, give me status and body". That capability is
//! the [`Transport`] trait.
//!
//! # Implementations
//!
//! - **`HttpClient`**: reqwest-backed client with timeouts and default headers
//! - **`MemoryTransport`**: canned responses keyed by URL, for tests and demos
//!
//! Neither implementation retries; failures reach the caller unchanged.

mod client;
mod memory;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, AUTH_TOKEN_HEADER};
pub use memory::MemoryTransport;
pub use transport::Transport;
