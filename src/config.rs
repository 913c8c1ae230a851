//! Client configuration
//!
//! Settings can come from a YAML file (JSON works too, being a YAML
//! subset) and are overridden by command-line flags.
//!
//! ```yaml
//! endpoint: "https://trafikkdata-api.atlas.vegvesen.no/"
//! http:
//!   timeout_seconds: 30
//!   user_agent: "my-app/1.0"
//!   headers:
//!     X-Client: "my-app"
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public endpoint of the traffic-data GraphQL API
pub const DEFAULT_ENDPOINT: &str = "https://trafikkdata-api.atlas.vegvesen.no/";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            http: HttpConfig::default(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent; the crate name and version when unset
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    /// Parse a YAML or JSON document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Replace the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Check that the endpoint is an absolute http(s) URL and the timeout is set
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.http.timeout_seconds == 0 {
            return Err(Error::config("http.timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    /// Settings for the HTTP transport
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.http.timeout_seconds));
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.http.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.http.timeout_seconds, 30);
        assert!(config.http.user_agent.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_document_uses_defaults() {
        let config = ClientConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
endpoint: "http://localhost:8080/graphql"
http:
  timeout_seconds: 5
  user_agent: "tests/1.0"
  headers:
    X-Client: "tests"
"#;

        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/graphql");
        assert_eq!(config.http.timeout_seconds, 5);

        let http = config.http_client_config();
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.user_agent, "tests/1.0");
        assert_eq!(http.default_headers.get("X-Client"), Some(&"tests".to_string()));
    }

    #[test]
    fn test_parse_json_config() {
        let config =
            ClientConfig::from_yaml_str(r#"{"endpoint": "https://example.org/gql"}"#).unwrap();
        assert_eq!(config.endpoint, "https://example.org/gql");
        assert_eq!(config.http.timeout_seconds, 30);
    }

    #[test]
    fn test_validate_rejects_relative_endpoint() {
        let err = ClientConfig::default().with_endpoint("/graphql").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_validate_rejects_other_scheme() {
        let err = ClientConfig::default()
            .with_endpoint("ftp://example.org/")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let err = ClientConfig::from_yaml_str("http:\n  timeout_seconds: 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: \"https://example.org/\"").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, "https://example.org/");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClientConfig::from_yaml_str("endpoint: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }
}
