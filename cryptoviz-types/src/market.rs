use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Latest snapshot for one tracked coin, as served by the price list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The coin's ticker.
    pub symbol: Symbol,
    /// Human-readable coin name.
    pub name: String,
    /// Latest observed price.
    pub price: f64,
    /// Market capitalization, when the upstream provides it.
    pub market_cap: Option<f64>,
    /// 24-hour traded volume, when the upstream provides it.
    pub volume_24h: Option<f64>,
    /// 24-hour percent change, when the upstream provides it.
    pub percent_change_24h: Option<f64>,
    /// Observation timestamp.
    pub ts: DateTime<Utc>,
}

/// Aggregate market sentiment, already normalized upstream onto 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentOverview {
    /// Blended overall sentiment score.
    pub sentiment: f64,
    /// Social-media component, when available.
    pub social_sentiment: Option<f64>,
    /// News component, when available.
    pub news_sentiment: Option<f64>,
    /// Fear & greed index, when available.
    pub fear_greed_index: Option<f64>,
    /// When the aggregate was computed upstream.
    pub ts: Option<DateTime<Utc>>,
}
