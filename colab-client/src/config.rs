//! Client configuration

use std::time::Duration;

/// Default API server
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Collaborators resource ("funcionarios" = employees)
pub const DEFAULT_RESOURCE_PATH: &str = "/api/v1/funcionarios";

/// Client configuration for the collaborators API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Path of the collaborators resource
    pub resource_path: String,

    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the given server
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            timeout: None,
        }
    }

    /// Load from the environment (and a `.env` file, if present).
    ///
    /// - `COLAB_API_URL`: base URL
    /// - `COLAB_RESOURCE_PATH`: resource path
    /// - `COLAB_TIMEOUT_SECS`: request timeout, `0` for none
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::new(
            std::env::var("COLAB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );
        if let Ok(path) = std::env::var("COLAB_RESOURCE_PATH") {
            config.resource_path = path;
        }
        config.timeout = std::env::var("COLAB_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        config
    }

    /// Set the resource path
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resource path with a single leading slash and no trailing slash
    pub fn collection_path(&self) -> String {
        format!("/{}", self.resource_path.trim_matches('/'))
    }

    /// `{resource}/{id}`
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.collection_path(), id)
    }

    /// Absolute URL for a path under the base URL
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Create a network HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
