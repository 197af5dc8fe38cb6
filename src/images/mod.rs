//! Compute images module
//!
//! Typed records for the virtual-machine images a compute service
//! manages, the functions that pull them out of API responses, and a
//! client tying those to a [`Transport`](crate::http::Transport).
//!
//! # Wire format
//!
//! ```text
//! GET /images/{id}      → {"image": {...}}
//! GET /images/detail    → {"images": [...], "images_links": [{"rel": "next", "href": "..."}]}
//! ```

mod client;
mod results;
mod types;

pub use client::ImagesClient;
pub use results::{extract_image, extract_images, ImagePage, IMAGES_LINKS_KEY};
pub use types::{Image, ImageStatus, Metadata, MetadataValue};
