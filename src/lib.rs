//! # compute-images
//!
//! Typed image records and link-based pagination for compute service APIs.
//!
//! ## Features
//!
//! - **Entity Extraction**: decode `{"image": {...}}` and `{"images": [...]}`
//!   bodies into [`Image`](images::Image) records, failing loudly on
//!   malformed or mistyped fields
//! - **Page Walker**: follow `images_links` `rel="next"` references until the
//!   listing is exhausted
//! - **Pluggable Transport**: any [`Transport`](http::Transport) can feed the
//!   pager; a reqwest-backed [`HttpClient`](http::HttpClient) is included
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use compute_images::{ClientSettings, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientSettings::new("https://compute.example.com/v2.1/demo")
//!         .with_token("gAAAA...")
//!         .images_client()?;
//!
//!     let image = client.get("f90f6034-2570-4974-8351-6b49732ef2eb").await?;
//!     println!("{} is {}", image.name, image.status);
//!
//!     let mut pager = client.list()?;
//!     while let Some(page) = pager.next_page().await? {
//!         for image in page.images()? {
//!             println!("{}", image.id);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──► ImagesClient ──► Transport (HttpClient / MemoryTransport)
//!                 │                    │
//!                 │              RawResponse
//!                 ▼                    │
//!          Pager<ImagePage> ◄──────────┘
//!                 │
//!      extract_image / extract_images ──► Image
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Raw responses and generic decoding
pub mod decode;

/// Link-based pagination
pub mod pagination;

/// HTTP transport
pub mod http;

/// Image records, extraction and client
pub mod images;

/// Client settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_settings, ClientSettings};
pub use error::{Error, ErrorKind, Result};
pub use images::{extract_image, extract_images, Image, ImagePage, ImageStatus, ImagesClient};
pub use pagination::{Page, Pager};
pub use types::Link;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
