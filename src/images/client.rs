//! Image operations against a compute endpoint

use super::results::{extract_image, extract_images, ImagePage};
use super::types::Image;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::Pager;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Client for the `images` resource of a compute service
#[derive(Clone)]
pub struct ImagesClient {
    transport: Arc<dyn Transport>,
    endpoint: Url,
}

impl ImagesClient {
    /// Create a client for the compute endpoint at `endpoint`
    ///
    /// `endpoint` is the versioned service root, e.g.
    /// `https://compute.example.com/v2.1/<project>`.
    pub fn new(transport: Arc<dyn Transport>, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Endpoint '{endpoint}' cannot carry a resource path"
            )));
        }
        Ok(Self {
            transport,
            endpoint,
        })
    }

    /// The compute endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch a single image by id
    pub async fn get(&self, id: &str) -> Result<Image> {
        let url = self.image_url(id)?;
        debug!(url = %url, "Fetching image");
        let raw = self.transport.get(&url).await?;
        extract_image(&raw)
    }

    /// Pager over the detailed image listing
    pub fn list(&self) -> Result<Pager<ImagePage>> {
        let url = self.resource_url(&["detail"])?;
        Ok(Pager::new(self.transport.clone(), url))
    }

    /// Every image across all pages
    pub async fn list_all(&self) -> Result<Vec<Image>> {
        let mut pager = self.list()?;
        let mut images = Vec::new();
        pager
            .each_page(|page| {
                images.extend(extract_images(page)?);
                Ok(true)
            })
            .await?;

        debug!(
            count = images.len(),
            pages = pager.pages_fetched(),
            "Listed images"
        );
        Ok(images)
    }

    /// Delete an image by id
    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.image_url(id)?;
        self.transport.delete(&url).await?;
        info!(id = %id, "Deleted image");
        Ok(())
    }

    /// Resolve an image name to its id
    ///
    /// Fails with [`Error::NotFound`] when no image has the name and with
    /// [`Error::MultipleFound`] when the name is ambiguous.
    pub async fn id_from_name(&self, name: &str) -> Result<String> {
        let mut matches: Vec<String> = self
            .list_all()
            .await?
            .into_iter()
            .filter(|image| image.name == name)
            .map(|image| image.id)
            .collect();

        match matches.len() {
            0 => Err(Error::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(Error::MultipleFound {
                name: name.to_string(),
                count,
            }),
        }
    }

    fn image_url(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(Error::config("Image id must not be empty"));
        }
        self.resource_url(&[id])
    }

    /// `{endpoint}/images/{segments...}`, with each segment percent-encoded
    fn resource_url(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("Endpoint cannot carry a resource path"))?
            .pop_if_empty()
            .push("images")
            .extend(segments);
        Ok(url.into())
    }
}

impl std::fmt::Debug for ImagesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagesClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
