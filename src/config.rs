//! Client settings
//!
//! Settings are plain serde structs so they can come from a YAML file,
//! from CLI flags, or be built in code.
//!
//! ```yaml
//! endpoint: https://compute.example.com/v2.1/my-project
//! token: gAAAAABk...
//! timeout_secs: 10
//! headers:
//!   X-OpenStack-Nova-API-Version: "2.1"
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::images::ImagesClient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Connection settings for an image client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Versioned compute endpoint
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Pre-issued identity token
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl ClientSettings {
    /// Create settings for an endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Default::default()
        }
    }

    /// Parse settings from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Set the token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The endpoint, or a config error when it is missing
    pub fn endpoint(&self) -> Result<&str> {
        self.endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::config("No compute endpoint configured"))
    }

    /// Build the HTTP client configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        if let Some(token) = &self.token {
            builder = builder.auth_token(token);
        }

        builder.build()
    }

    /// Build an images client from these settings
    pub fn images_client(&self) -> Result<ImagesClient> {
        let endpoint = self.endpoint()?;
        let http = HttpClient::with_config(self.http_config())?;
        ImagesClient::new(Arc::new(http), endpoint)
    }
}

/// Load settings from a YAML file
pub fn load_settings(path: impl AsRef<Path>) -> Result<ClientSettings> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read settings file '{}': {e}",
            path.display()
        ))
    })?;
    ClientSettings::from_yaml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::AUTH_TOKEN_HEADER;
    use std::io::Write;

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
endpoint: https://compute.example.com/v2.1/demo
token: abc123
timeout_secs: 5
headers:
  X-OpenStack-Nova-API-Version: "2.1"
"#;
        let settings = ClientSettings::from_yaml(yaml).unwrap();
        assert_eq!(
            settings.endpoint().unwrap(),
            "https://compute.example.com/v2.1/demo"
        );
        assert_eq!(settings.token.as_deref(), Some("abc123"));
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.headers.len(), 1);
    }

    #[test]
    fn test_defaults() {
        let settings =
            ClientSettings::from_yaml("endpoint: http://localhost:8774/v2.1").unwrap();
        assert_eq!(settings.timeout_secs, 30);
        assert!(settings.token.is_none());
        assert!(settings.headers.is_empty());
    }

    #[test]
    fn test_missing_endpoint() {
        let settings = ClientSettings::from_yaml("timeout_secs: 5").unwrap();
        let err = settings.endpoint().unwrap_err();
        assert!(err.to_string().contains("No compute endpoint"));
        assert!(settings.images_client().is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClientSettings::from_yaml("timeout_secs: [not, a, number]").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_http_config() {
        let settings = ClientSettings::new("http://localhost:8774/v2.1").with_token("tok");
        let config = settings.http_config();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.default_headers.get(AUTH_TOKEN_HEADER),
            Some(&"tok".to_string())
        );
    }

    #[test]
    fn test_images_client() {
        let settings = ClientSettings::new("http://localhost:8774/v2.1/demo");
        let client = settings.images_client().unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8774/v2.1/demo");
    }

    #[test]
    fn test_load_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: http://localhost:8774/v2.1").unwrap();
        writeln!(file, "user_agent: ops-script/2.0").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.user_agent.as_deref(), Some("ops-script/2.0"));
        assert_eq!(settings.http_config().user_agent, "ops-script/2.0");
    }

    #[test]
    fn test_load_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }
}
