//! Deterministic fixture data. Every series is a pure function of the
//! symbol and timeframe so tests can assert exact values.

use chrono::{DateTime, Duration, Utc};

use cryptoviz_types::{PricePoint, PriceSeries, Quote, SentimentOverview, Symbol, Timeframe};

/// Fixed anchor so fixture series never depend on the wall clock.
const ANCHOR_EPOCH: i64 = 1_700_000_000;

/// Hourly cadence for fixture history.
const STEP_HOURS: i64 = 1;

fn base_price(symbol: &Symbol) -> f64 {
    match symbol.as_str() {
        "btc" => 50_000.0,
        "eth" => 3_000.0,
        "bnb" => 400.0,
        "sol" => 100.0,
        "xrp" => 0.6,
        "ada" => 0.5,
        "doge" => 0.08,
        "trx" => 0.1,
        other => 10.0 + other.len() as f64,
    }
}

fn seed(symbol: &Symbol) -> i64 {
    symbol.as_str().bytes().map(i64::from).sum()
}

/// The fixture anchor timestamp (the newest point of every series).
#[must_use]
pub fn anchor() -> DateTime<Utc> {
    DateTime::from_timestamp(ANCHOR_EPOCH, 0).unwrap()
}

/// Deterministic hourly history ending at the anchor.
#[must_use]
pub fn history(symbol: &Symbol, timeframe: Timeframe) -> PriceSeries {
    let count = i64::from(timeframe.days()) * 24 / STEP_HOURS;
    let base = base_price(symbol);
    let seed = seed(symbol);
    let points = (0..count)
        .map(|i| {
            let ts = anchor() - Duration::hours((count - 1 - i) * STEP_HOURS);
            // Small deterministic wobble around the base price.
            let wobble = ((i * 31 + seed) % 17) as f64 / 17.0 - 0.5;
            PricePoint::new(ts, base * (1.0 + 0.02 * wobble))
        })
        .collect();
    PriceSeries::new(symbol.clone(), points)
}

/// Deterministic latest snapshots for the tracked symbols.
#[must_use]
pub fn quotes() -> Vec<Quote> {
    Symbol::tracked()
        .into_iter()
        .map(|symbol| {
            let price = base_price(&symbol);
            Quote {
                name: symbol.as_str().to_ascii_uppercase(),
                price,
                market_cap: Some(price * 1.0e7),
                volume_24h: Some(price * 1.0e5),
                percent_change_24h: Some(((seed(&symbol) % 11) - 5) as f64 / 2.0),
                ts: anchor(),
                symbol,
            }
        })
        .collect()
}

/// A fixed mildly-greedy sentiment aggregate.
#[must_use]
pub fn sentiment() -> SentimentOverview {
    SentimentOverview {
        sentiment: 62.5,
        social_sentiment: Some(68.0),
        news_sentiment: Some(58.5),
        fear_greed_index: Some(55.0),
        ts: Some(anchor()),
    }
}
