//! Common types used throughout compute-images
//!
//! Shared type aliases and the hypermedia link reference used by list
//! responses.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Link Reference
// ============================================================================

/// A `{rel, href}` pair advertising a related resource
///
/// List endpoints embed an array of these (e.g. `images_links`); the last
/// one with `rel == "next"` points at the following page. Missing fields
/// read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation of the linked resource ("next", "self", "bookmark", ...)
    #[serde(default)]
    pub rel: String,
    /// URL of the linked resource
    #[serde(default)]
    pub href: String,
}

impl Link {
    /// Create a new link
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Check whether this link has the given relation
    pub fn is(&self, rel: &str) -> bool {
        self.rel == rel
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
