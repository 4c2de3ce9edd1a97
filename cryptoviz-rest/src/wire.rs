//! Wire formats of the dashboard backend and their conversion into domain
//! types. The upstream serves parallel arrays and loosely formatted
//! timestamps; everything unparsable is dropped here, never null-padded.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use cryptoviz_types::{PricePoint, PriceSeries, Quote, SentimentOverview, Symbol, VizError};

/// Primary timestamp format used by the backend's CSV-backed endpoints.
const BACKEND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `GET /api/crypto/{symbol}/history` body: parallel arrays of equal length.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryDto {
    pub timestamps: Vec<String>,
    pub prices: Vec<Option<f64>>,
}

impl HistoryDto {
    /// Zip the parallel arrays into a raw series, dropping rows whose
    /// timestamp fails to parse or whose price is missing.
    pub(crate) fn into_series(self, symbol: &Symbol) -> Result<PriceSeries, VizError> {
        if self.timestamps.len() != self.prices.len() {
            return Err(VizError::Data(format!(
                "history arrays for {symbol} differ in length: {} timestamps vs {} prices",
                self.timestamps.len(),
                self.prices.len()
            )));
        }
        let total = self.timestamps.len();
        let points: Vec<PricePoint> = self
            .timestamps
            .iter()
            .zip(self.prices)
            .filter_map(|(raw_ts, price)| {
                let ts = parse_timestamp(raw_ts)?;
                Some(PricePoint::new(ts, price?))
            })
            .collect();
        if points.len() < total {
            warn!(
                symbol = %symbol,
                dropped = total - points.len(),
                "dropped unparsable history rows"
            );
        }
        Ok(PriceSeries::new(symbol.clone(), points))
    }
}

/// `GET /api/crypto` body.
#[derive(Debug, Deserialize)]
pub(crate) struct LatestDto {
    pub data: Vec<QuoteDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteDto {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub timestamp: String,
}

impl QuoteDto {
    pub(crate) fn into_quote(self) -> Option<Quote> {
        let ts = parse_timestamp(&self.timestamp)?;
        Some(Quote {
            symbol: Symbol::new(&self.symbol),
            name: self.name,
            price: self.price,
            market_cap: self.market_cap,
            volume_24h: self.volume_24h,
            percent_change_24h: self.percent_change_24h,
            ts,
        })
    }
}

/// `GET /api/sentiment/overall` body.
#[derive(Debug, Deserialize)]
pub(crate) struct SentimentDto {
    pub sentiment: f64,
    pub social_sentiment: Option<f64>,
    pub news_sentiment: Option<f64>,
    pub fear_greed_index: Option<f64>,
    pub timestamp: Option<String>,
}

impl SentimentDto {
    pub(crate) fn into_overview(self) -> SentimentOverview {
        SentimentOverview {
            sentiment: self.sentiment,
            social_sentiment: self.social_sentiment,
            news_sentiment: self.news_sentiment,
            fear_greed_index: self.fear_greed_index,
            ts: self.timestamp.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Parse a backend timestamp by chronological value.
///
/// Tries the backend's naive `%Y-%m-%d %H:%M:%S` format (treated as UTC),
/// then RFC 3339, then epoch seconds.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, BACKEND_FORMAT) {
        return Some(naive.and_utc());
    }
    if let Ok(fixed) = DateTime::parse_from_rfc3339(raw) {
        return Some(fixed.with_timezone(&Utc));
    }
    if let Ok(epoch) = raw.trim().parse::<i64>() {
        return DateTime::from_timestamp(epoch, 0);
    }
    None
}
