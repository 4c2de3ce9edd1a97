//! cryptoviz-rest
//!
//! HTTP connector for the cryptoviz dashboard backend. Implements the
//! `cryptoviz_core` source traits against the backend's REST endpoints:
//!
//! - `GET /api/crypto/{symbol}/history` — parallel `timestamps`/`prices` arrays
//! - `GET /api/crypto` — latest per-coin snapshots
//! - `GET /api/sentiment/overall` — aggregate market sentiment
//!
//! The connector is transport only: it zips and validates wire data into
//! domain types and leaves alignment and normalization to the core pipeline.
//! There is no retry policy; a failed request surfaces as a source-tagged
//! error and the orchestrator decides what to do with the batch.
#![warn(missing_docs)]

mod builder;
mod wire;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

pub use builder::RestConnectorBuilder;
use cryptoviz_core::source::{CryptoSource, HistoryProvider, QuoteProvider, SentimentProvider};
use cryptoviz_types::{PriceSeries, Quote, SentimentOverview, Symbol, Timeframe, VizError};
use wire::{HistoryDto, LatestDto, SentimentDto};

/// Connector backed by the dashboard's REST API.
pub struct RestConnector {
    base: Url,
    http: reqwest::Client,
}

impl RestConnector {
    /// Stable source name used in logs and errors.
    pub const NAME: &'static str = "cryptoviz-rest";

    /// Start building a connector.
    #[must_use]
    pub fn builder() -> RestConnectorBuilder {
        RestConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(base: Url, http: reqwest::Client) -> Self {
        Self { base, http }
    }

    /// The validated base URL this connector talks to.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, VizError> {
        self.base
            .join(path)
            .map_err(|e| VizError::InvalidArg(format!("invalid endpoint {path:?}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, VizError> {
        debug!(url = %url, what, "issuing backend request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| VizError::source(Self::NAME, format!("{what} request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(VizError::source(
                Self::NAME,
                format!("{what} request returned {}", response.status()),
            ));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| VizError::source(Self::NAME, format!("{what} body unreadable: {e}")))
    }
}

impl CryptoSource for RestConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self)
    }

    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        Some(self)
    }
}

#[async_trait]
impl HistoryProvider for RestConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> Result<PriceSeries, VizError> {
        let url = self.endpoint(&format!("/api/crypto/{symbol}/history"))?;
        let dto: HistoryDto = self.get_json(url, "history").await?;
        let mut series = dto.into_series(symbol)?;
        // The endpoint returns the full retained window; trim to the
        // requested timeframe here so the aligner sees only the view span.
        let cutoff = Utc::now() - ChronoDuration::days(i64::from(timeframe.days()));
        series.points.retain(|p| p.ts >= cutoff);
        Ok(series)
    }
}

#[async_trait]
impl QuoteProvider for RestConnector {
    async fn latest(&self) -> Result<Vec<Quote>, VizError> {
        let url = self.endpoint("/api/crypto")?;
        let dto: LatestDto = self.get_json(url, "quotes").await?;
        Ok(dto
            .data
            .into_iter()
            .filter_map(wire::QuoteDto::into_quote)
            .collect())
    }
}

#[async_trait]
impl SentimentProvider for RestConnector {
    async fn sentiment(&self) -> Result<SentimentOverview, VizError> {
        let url = self.endpoint("/api/sentiment/overall")?;
        let dto: SentimentDto = self.get_json(url, "sentiment").await?;
        Ok(dto.into_overview())
    }
}
