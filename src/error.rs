//! Error types for compute-images
//!
//! Every public API returns `Result<T, Error>`. Errors fall into two
//! families that callers usually care about: decode failures (the server
//! answered, but the body is not what we expect) and transport failures
//! (the request never produced a usable 2xx response).

use thiserror::Error;

/// The main error type for compute-images
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("No image found with name '{name}'")]
    NotFound { name: String },

    #[error("Found {count} images with name '{name}'")]
    MultipleFound { name: String, count: usize },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or type-mismatched response body
    Decode,
    /// Connection failure, timeout or non-2xx status
    Transport,
    /// Name lookup did not resolve to exactly one image
    Lookup,
    /// Bad settings, settings file or endpoint
    Config,
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. } => {
                ErrorKind::Transport
            }
            Error::NotFound { .. } | Error::MultipleFound { .. } => ErrorKind::Lookup,
            Error::InvalidUrl(_) | Error::Config { .. } | Error::YamlParse(_) => ErrorKind::Config,
        }
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// HTTP status code, if the server answered with a non-2xx status
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(e.to_string())
    }
}

/// Result type alias for compute-images
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::decode("expected u32");
        assert_eq!(err.to_string(), "Failed to decode response: expected u32");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::MultipleFound {
            name: "cirros".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "Found 2 images with name 'cirros'");
    }

    #[test]
    fn test_error_kind() {
        assert!(Error::decode("bad").is_decode());
        assert!(!Error::decode("bad").is_transport());

        assert!(Error::http_status(500, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_transport());

        assert_eq!(
            Error::NotFound {
                name: "x".to_string()
            }
            .kind(),
            ErrorKind::Lookup
        );
        assert_eq!(Error::config("missing endpoint").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_serde_json_error_is_decode() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.is_decode());
    }

    #[test]
    fn test_status() {
        assert_eq!(Error::http_status(503, "").status(), Some(503));
        assert_eq!(Error::decode("x").status(), None);
    }
}
