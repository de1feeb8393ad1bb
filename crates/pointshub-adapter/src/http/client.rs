/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client and session lifecycle
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::{PointsHubError, Result};
use crate::types::ApiErrorBody;

/// Base URL for the PointsHub API
const DEFAULT_BASE_URL: &str = "https://api.buysteampoints.com";

/// Header carrying the API key on authenticated endpoints
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Total per-request deadline. `None` leaves requests unbounded; buy
    /// orders can take the supplier up to 30 minutes to fill.
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Open connection pool, alive between `open()` and `close()`
#[derive(Debug)]
struct Session {
    http: Client,
}

/// Main HTTP client for the PointsHub API
#[derive(Debug)]
pub struct PointsHubClient {
    config: ClientConfig,
    base_url: Url,
    api_key: Option<String>,
    session: Option<Session>,
}

impl PointsHubClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a non-default base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        Ok(Self {
            config,
            base_url: Url::parse(base_url)?,
            api_key: None,
            session: None,
        })
    }

    /// Set the API key used by authenticated endpoints
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Get the API key if set
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Open the session, creating the underlying connection pool.
    ///
    /// Idempotent: opening an already-open client is a no-op. Every endpoint
    /// method requires an open session.
    pub fn open(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }

        let mut builder = Client::builder().connect_timeout(self.config.connect_timeout);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|err| PointsHubError::Unexpected {
            message: "failed to build HTTP client".to_string(),
            source: Some(err),
        })?;

        self.session = Some(Session { http });
        debug!("opened HTTP session");
        Ok(())
    }

    /// Close the session, releasing all pooled connections.
    ///
    /// Idempotent: closing an already-closed client is a no-op. Dropping the
    /// client releases the pool the same way on every exit path, including
    /// cancellation of a task holding it.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            debug!("closed HTTP session");
        }
    }

    /// Whether the session is currently open
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Build a request builder for a public endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let session = self.session.as_ref().ok_or(PointsHubError::NotConnected)?;
        let url = self.base_url.join(endpoint)?;
        Ok(session.http.request(method, url))
    }

    /// Build a request builder carrying the API-key header.
    ///
    /// Fails before any network I/O when no API key is configured.
    pub(crate) fn auth_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let builder = self.request(method, endpoint)?;
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| PointsHubError::Authentication {
                message: "API key is required for this operation".to_string(),
            })?;
        Ok(builder.header(API_KEY_HEADER, api_key.as_str()))
    }

    /// Send a request and decode the JSON response, classifying failures.
    ///
    /// Non-success responses surface the server's `{"error": "…"}` message
    /// when the body carries one, falling back to the HTTP status reason.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await.map_err(PointsHubError::from_transport)?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            let body = response.text().await.map_err(PointsHubError::from_transport)?;
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(PointsHubError::from_status(status, message));
        }

        response
            .json()
            .await
            .map_err(|err| PointsHubError::Unexpected {
                message: "failed to decode response body".to_string(),
                source: Some(err),
            })
    }
}
