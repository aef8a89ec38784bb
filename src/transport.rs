//! HTTP transport to the scan API.
//!
//! The [`Transport`] trait is the seam between request building and network
//! I/O. [`HttpTransport`] is the blocking `reqwest` implementation used by
//! default; tests and embedders can plug in their own.

use reqwest::blocking::Client;
use url::Url;

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::query_builder::QueryParams;
use crate::response::Envelope;

/// Sends one request and returns the decoded envelope.
///
/// Implementations fail on network errors and non-2xx statuses; they do not
/// inspect the envelope's `status`.
pub trait Transport: Send + Sync {
    fn request(&self, endpoint: &str, params: &QueryParams) -> Result<Envelope>;
}

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Create a transport from the client configuration.
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("confluxscan-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url()?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }
}

impl Transport for HttpTransport {
    fn request(&self, endpoint: &str, params: &QueryParams) -> Result<Envelope> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, params = params.len(), "sending scan API request");

        let mut query = params.build();
        if let Some(key) = &self.api_key {
            query.push(("apikey".to_string(), key.clone()));
        }

        let resp = self.client.get(url).query(&query).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ScanError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}
