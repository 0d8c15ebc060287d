//! reqwest-backed controller client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::error::{ControllerError, Result};
use super::status::ControllerStatus;
use super::Controller;
use crate::profile::ProfileStep;

/// Per-request timeout applied to every controller call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of the status endpoint
pub const STATUS_PATH: &str = "/api/status";

/// Path prefix of the light configuration endpoint
pub const LIGHT_PATH: &str = "/api/light";

/// HTTP client for a terrarium controller
#[derive(Debug, Clone)]
pub struct HttpController {
    /// Base URL without trailing slash (e.g., "https://terrarium.local")
    base_url: String,
    client: Client,
}

impl HttpController {
    /// Create a client with the default request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Self::with_client(base_url, client)
    }

    /// Create a client around a preconfigured reqwest `Client`.
    ///
    /// The base URL must be an absolute `http` or `https` URL.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Result<Self> {
        let base_url = base_url.into();
        check_base_url(&base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL of the controller
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn light_url(&self, zone: &str) -> String {
        format!("{}{LIGHT_PATH}/{zone}", self.base_url)
    }

    fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.base_url)
    }
}

/// Reject base URLs reqwest would only refuse at request time
fn check_base_url(base_url: &str) -> Result<()> {
    let invalid = |message: String| ControllerError::InvalidBaseUrl {
        url: base_url.to_string(),
        message,
    };
    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(())
}

/// Turn a non-2xx response into a `ControllerError::Status`
async fn check_status(response: reqwest::Response, url: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ControllerError::status(status.as_u16(), url, body))
}

#[async_trait]
impl Controller for HttpController {
    async fn push_step(&self, zone: &str, step: &ProfileStep) -> Result<()> {
        let url = self.light_url(zone);
        debug!(%url, sky = step.sky, "pushing profile step");
        let response = self.client.post(&url).json(step).send().await?;
        check_status(response, &url).await?;
        Ok(())
    }

    async fn fetch_status(&self) -> Result<ControllerStatus> {
        let url = self.status_url();
        debug!(%url, "polling status");
        let response = self.client.get(&url).send().await?;
        let response = check_status(response, &url).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ControllerError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
