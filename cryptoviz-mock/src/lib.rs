//! cryptoviz-mock
//!
//! Deterministic mock source for CI-safe tests and examples. History, quotes,
//! and sentiment come from static fixtures; a handful of trigger symbols
//! simulate failure modes:
//!
//! - `FAIL` — the history call errors.
//! - `TIMEOUT` — the history call sleeps long enough to trip any reasonable
//!   per-source timeout.
//! - `EMPTY` — the history call succeeds with zero points (a degenerate
//!   series).
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;

use cryptoviz_core::source::{CryptoSource, HistoryProvider, QuoteProvider, SentimentProvider};
use cryptoviz_types::{PriceSeries, Quote, SentimentOverview, Symbol, Timeframe, VizError};

pub mod fixtures;

/// How long the `TIMEOUT` trigger symbol stalls a history call.
pub const TIMEOUT_STALL: Duration = Duration::from_millis(200);

/// Mock source providing deterministic fixture data.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the mock source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_stall(symbol: &Symbol) -> Result<(), VizError> {
        match symbol.as_str() {
            "fail" => Err(VizError::source(
                "cryptoviz-mock",
                "forced failure: history",
            )),
            "timeout" => {
                tokio::time::sleep(TIMEOUT_STALL).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl CryptoSource for MockSource {
    fn name(&self) -> &'static str {
        "cryptoviz-mock"
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
impl HistoryProvider for MockSource {
    async fn history(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> Result<PriceSeries, VizError> {
        Self::maybe_fail_or_stall(symbol).await?;
        if symbol.as_str() == "empty" {
            return Ok(PriceSeries::new(symbol.clone(), vec![]));
        }
        Ok(fixtures::history(symbol, timeframe))
    }
}

#[async_trait]
impl QuoteProvider for MockSource {
    async fn latest(&self) -> Result<Vec<Quote>, VizError> {
        Ok(fixtures::quotes())
    }
}

#[async_trait]
impl SentimentProvider for MockSource {
    async fn sentiment(&self) -> Result<SentimentOverview, VizError> {
        Ok(fixtures::sentiment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_history_is_deterministic() {
        let source = MockSource::new();
        let symbol = Symbol::new("btc");
        let a = source.history(&symbol, Timeframe::Day).await.unwrap();
        let b = source.history(&symbol, Timeframe::Day).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.points.len(), 24);
    }

    #[tokio::test]
    async fn trigger_symbols_behave() {
        let source = MockSource::new();
        assert!(
            source
                .history(&Symbol::new("FAIL"), Timeframe::Day)
                .await
                .is_err()
        );
        let empty = source
            .history(&Symbol::new("EMPTY"), Timeframe::Day)
            .await
            .unwrap();
        assert!(empty.is_empty());
    }
}
