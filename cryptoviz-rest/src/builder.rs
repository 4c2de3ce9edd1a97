use std::time::Duration;

use url::Url;

use crate::RestConnector;
use cryptoviz_types::VizError;

/// Builder for [`RestConnector`].
///
/// The base URL is required; everything else has conservative defaults
/// (30 second HTTP timeout, crate-versioned user agent).
#[derive(Debug)]
pub struct RestConnectorBuilder {
    base_url: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl Default for RestConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RestConnectorBuilder {
    /// Create a builder with default settings and no base URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("cryptoviz/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the backend base URL, e.g. `http://localhost:5000`.
    #[must_use]
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Override the whole-request HTTP timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration and build the connector.
    ///
    /// # Errors
    /// Returns `VizError::InvalidArg` when the base URL is missing or does
    /// not parse, and `VizError::Source` when the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<RestConnector, VizError> {
        let raw = self
            .base_url
            .ok_or_else(|| VizError::InvalidArg("base URL is required".into()))?;
        let base = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| VizError::InvalidArg(format!("invalid base URL {raw:?}: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| VizError::source(RestConnector::NAME, e.to_string()))?;
        Ok(RestConnector::from_parts(base, http))
    }
}
