//! Connection configuration

use crate::error::Result;
use std::time::Duration;
use url::Url;

/// Configuration for talking to one Philomena-style API
///
/// Holds the API base URL, an optional auth key, and an optional inter-page
/// delay used by the stream adapters for cooperative rate limiting. Cloning
/// is cheap (the underlying `reqwest::Client` is reference-counted), so a
/// config may be shared by value across concurrent streams.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    base_url: String,
    api_key: Option<String>,
    page_delay: Option<Duration>,
    http: reqwest::Client,
}

impl ConnectionConfig {
    /// Create a config with default transport settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder(base_url).build()
    }

    /// Create a config builder
    pub fn builder(base_url: impl Into<String>) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder {
            base_url: base_url.into(),
            api_key: None,
            page_delay: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("philomena-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// The API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured auth key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The configured inter-page delay, if any
    pub fn page_delay(&self) -> Option<Duration> {
        self.page_delay
    }

    /// The underlying HTTP client
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Build the full URL for an endpoint path
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

/// Builder for [`ConnectionConfig`]
#[derive(Debug)]
pub struct ConnectionConfigBuilder {
    base_url: String,
    api_key: Option<String>,
    page_delay: Option<Duration>,
    timeout: Duration,
    user_agent: String,
}

impl ConnectionConfigBuilder {
    /// Set the auth key sent with every request
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the delay the stream adapters insert between page fetches
    #[must_use]
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = Some(delay);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ConnectionConfig {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        ConnectionConfig {
            base_url: self.base_url,
            api_key: self.api_key,
            page_delay: self.page_delay,
            http,
        }
    }
}
