//! Image record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Free-form image metadata
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A virtual-machine image as reported by the compute service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// When the image was created
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// When the image last changed state
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Minimum disk size (GB) a server needs to boot the image
    pub min_disk: u64,

    /// Minimum RAM (MB) a server needs to boot the image
    pub min_ram: u64,

    /// Creation progress in percent; usable images report 100
    pub progress: u32,

    /// Server-reported status
    pub status: ImageStatus,

    /// Arbitrary key/value metadata
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metadata: Metadata,
}

impl Image {
    /// Check if the image is ACTIVE
    pub fn is_active(&self) -> bool {
        self.status == ImageStatus::Active
    }

    /// Check if image creation has finished
    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }

    /// Look up a metadata value
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Status
// ============================================================================

/// Image status
///
/// The set of statuses is owned by the server; values this crate does
/// not know about are kept verbatim in [`ImageStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageStatus {
    Active,
    Saving,
    Error,
    Deleted,
    Unknown,
    Other(String),
}

impl ImageStatus {
    /// The status string as sent by the server
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Saving => "SAVING",
            Self::Error => "ERROR",
            Self::Deleted => "DELETED",
            Self::Unknown => "UNKNOWN",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ImageStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ACTIVE" => Self::Active,
            "SAVING" => Self::Saving,
            "ERROR" => Self::Error,
            "DELETED" => Self::Deleted,
            "UNKNOWN" => Self::Unknown,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ImageStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ImageStatus> for String {
    fn from(status: ImageStatus) -> Self {
        match status {
            ImageStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Metadata Values
// ============================================================================

/// A scalar metadata value
///
/// Nested arrays and objects are not accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl MetadataValue {
    /// String contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}
