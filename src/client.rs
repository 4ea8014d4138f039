//! HTTP client wrapper for IMDS requests.

use std::time::Duration;

use reqwest::Client;

/// Default timeout for metadata field requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default metadata service base URL (link-local address).
pub const DEFAULT_BASE_URL: &str = "http://169.254.169.254";

/// HTTP client wrapper for instance metadata service requests.
#[derive(Debug, Clone)]
pub struct ImdsClient {
    inner: Client,
    base_url: String,
}

impl ImdsClient {
    /// Create a new client with the specified timeout and base URL.
    pub fn new(timeout: Duration, base_url: &str) -> Result<Self, reqwest::Error> {
        let inner = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new client with the default timeout and base URL.
    pub fn with_default_timeout() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom base URL (for testing).
    pub fn with_base_url(base_url: &str) -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_TIMEOUT, base_url)
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
