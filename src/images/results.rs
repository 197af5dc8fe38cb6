//! Extracting images from responses

use super::types::Image;
use crate::decode::{extract_into, RawResponse};
use crate::error::Result;
use crate::pagination::{linked_next_url, Page};
use serde::Deserialize;

/// Key holding the link array on image list pages
pub const IMAGES_LINKS_KEY: &str = "images_links";

#[derive(Deserialize)]
struct SingleImage {
    image: Image,
}

#[derive(Deserialize)]
struct ImageList {
    #[serde(default)]
    images: Option<Vec<Image>>,
}

/// Decode a `{"image": {...}}` response
pub fn extract_image(raw: &RawResponse) -> Result<Image> {
    Ok(extract_into::<SingleImage>(raw)?.image)
}

/// Decode the images on a list page, in server order
///
/// A missing or null `images` array yields an empty list.
pub fn extract_images(page: &ImagePage) -> Result<Vec<Image>> {
    Ok(extract_into::<ImageList>(&page.raw)?
        .images
        .unwrap_or_default())
}

/// One page of image list results
#[derive(Debug, Clone)]
pub struct ImagePage {
    raw: RawResponse,
}

impl ImagePage {
    /// Images on this page
    pub fn images(&self) -> Result<Vec<Image>> {
        extract_images(self)
    }
}

impl Page for ImagePage {
    fn from_response(raw: RawResponse) -> Self {
        Self { raw }
    }

    fn raw(&self) -> &RawResponse {
        &self.raw
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(extract_images(self)?.is_empty())
    }

    fn next_page_url(&self) -> Result<Option<String>> {
        linked_next_url(&self.raw, IMAGES_LINKS_KEY)
    }
}
