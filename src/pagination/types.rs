//! Pagination types and traits
//!
//! Defines the page abstraction and the shared "find the next link" rule.

use crate::decode::{extract_into, RawResponse};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Link, OptionStringExt};

/// Relation name of the link pointing at the following page
pub const NEXT_REL: &str = "next";

/// One page of list results
pub trait Page: Sized {
    /// Wrap a fetched response
    fn from_response(raw: RawResponse) -> Self;

    /// The response this page wraps
    fn raw(&self) -> &RawResponse;

    /// Check if the page carries no results
    fn is_empty(&self) -> Result<bool>;

    /// URL of the next page, `None` when this is the last one
    fn next_page_url(&self) -> Result<Option<String>>;
}

/// Return the href of the last `next` link, if any
///
/// Later `next` links override earlier ones. An empty href counts as no
/// link.
pub fn extract_next_url(links: &[Link]) -> Option<String> {
    links
        .iter()
        .rev()
        .find(|link| link.is(NEXT_REL))
        .map(|link| link.href.clone())
        .none_if_empty()
}

/// Find the next page URL in a link array stored under `links_key`
///
/// An absent or null key means there is no next page. Anything else under
/// the key must be an array of `{rel, href}` objects or decoding fails.
pub fn linked_next_url(raw: &RawResponse, links_key: &str) -> Result<Option<String>> {
    let mut body: JsonObject = extract_into(raw)?;

    let links: Vec<Link> = match body.remove(links_key) {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| Error::decode(format!("Malformed '{links_key}' array: {e}")))?,
    };

    Ok(extract_next_url(&links))
}
