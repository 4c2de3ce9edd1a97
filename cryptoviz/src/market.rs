use cryptoviz_core::{CorrelationReport, VolatilityReport, correlation_matrix, volatility_report};
use cryptoviz_types::{Quote, SentimentOverview, Symbol, VizError};

use crate::core::Dashboard;

impl Dashboard {
    /// Latest per-coin snapshots for the price list view.
    ///
    /// # Errors
    /// `VizError::Unsupported` when the source has no quote capability.
    pub async fn latest_quotes(&self) -> Result<Vec<Quote>, VizError> {
        let provider = self
            .source
            .as_quote_provider()
            .ok_or_else(|| VizError::unsupported("quotes"))?;
        provider.latest().await
    }

    /// Aggregate market sentiment for the gauge view.
    ///
    /// # Errors
    /// `VizError::Unsupported` when the source has no sentiment capability.
    pub async fn sentiment(&self) -> Result<SentimentOverview, VizError> {
        let provider = self
            .source
            .as_sentiment_provider()
            .ok_or_else(|| VizError::unsupported("sentiment"))?;
        provider.sentiment().await
    }

    /// Volatility metrics for one symbol over the configured timeframe,
    /// computed from a fresh history fetch.
    ///
    /// # Errors
    /// `VizError::Unsupported` without history capability; otherwise
    /// whatever the underlying fetch surfaces.
    pub async fn volatility(&self, symbol: &Symbol) -> Result<VolatilityReport, VizError> {
        let provider = self
            .source
            .as_history_provider()
            .ok_or_else(|| VizError::unsupported("history"))?;
        let series = self.fetch_one(provider, symbol).await?;
        Ok(volatility_report(&series))
    }

    /// Return-correlation matrix across the tracked symbols, computed from
    /// a fresh all-or-nothing batch.
    ///
    /// # Errors
    /// Same failure modes as [`Dashboard::refresh_trend`].
    pub async fn correlation(&self) -> Result<CorrelationReport, VizError> {
        let batch = self.fetch_aligned().await?;
        Ok(correlation_matrix(&batch))
    }
}
