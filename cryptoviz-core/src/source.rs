use async_trait::async_trait;

use cryptoviz_types::{PriceSeries, Quote, SentimentOverview, Symbol, Timeframe, VizError};

/// Focused role trait for sources that provide per-symbol price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch the raw history for `symbol` over the requested window.
    ///
    /// Implementations return points as delivered by the upstream; ordering
    /// and duplicate handling are the aligner's job. Invalid prices may be
    /// dropped here or by the aligner.
    async fn history(&self, symbol: &Symbol, timeframe: Timeframe)
    -> Result<PriceSeries, VizError>;
}

/// Focused role trait for sources that provide the latest per-coin snapshots.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the latest snapshot for every tracked coin.
    async fn latest(&self) -> Result<Vec<Quote>, VizError>;
}

/// Focused role trait for sources that provide aggregate market sentiment.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Fetch the current market-wide sentiment aggregate.
    async fn sentiment(&self) -> Result<SentimentOverview, VizError>;
}

/// A pluggable data source for the dashboard.
///
/// Sources advertise capabilities through the `as_*_provider` accessors;
/// returning `None` means the capability is unsupported and the orchestrator
/// surfaces `VizError::Unsupported` instead of calling it.
pub trait CryptoSource: Send + Sync {
    /// Stable source name used in logs and source-tagged errors.
    fn name(&self) -> &'static str;

    /// History capability, if supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Latest-quotes capability, if supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// Sentiment capability, if supported.
    fn as_sentiment_provider(&self) -> Option<&dyn SentimentProvider> {
        None
    }
}
