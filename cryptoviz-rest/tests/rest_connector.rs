use chrono::{Duration, Utc};
use httpmock::prelude::*;
use serde_json::json;

use cryptoviz_core::source::{CryptoSource, HistoryProvider, QuoteProvider, SentimentProvider};
use cryptoviz_rest::RestConnector;
use cryptoviz_types::{Symbol, Timeframe, VizError};

fn connector(server: &MockServer) -> RestConnector {
    RestConnector::builder()
        .base_url(server.base_url())
        .build()
        .unwrap()
}

fn backend_ts(offset: Duration) -> String {
    (Utc::now() - offset).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[tokio::test]
async fn history_zips_parallel_arrays() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/crypto/btc/history");
            then.status(200).json_body(json!({
                "timestamps": [backend_ts(Duration::hours(2)), backend_ts(Duration::hours(1))],
                "prices": [50_000.0, 51_000.0],
            }));
        })
        .await;

    let series = connector(&server)
        .history(&Symbol::new("btc"), Timeframe::Week)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(series.symbol, Symbol::new("btc"));
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.points[0].price, 50_000.0);
    assert_eq!(series.points[1].price, 51_000.0);
}

#[tokio::test]
async fn history_trims_to_the_requested_timeframe() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/crypto/eth/history");
            then.status(200).json_body(json!({
                "timestamps": [backend_ts(Duration::days(10)), backend_ts(Duration::hours(3))],
                "prices": [2_000.0, 3_000.0],
            }));
        })
        .await;

    let series = connector(&server)
        .history(&Symbol::new("eth"), Timeframe::Week)
        .await
        .unwrap();

    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].price, 3_000.0);
}

#[tokio::test]
async fn history_drops_unparsable_rows() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/crypto/sol/history");
            then.status(200).json_body(json!({
                "timestamps": [backend_ts(Duration::hours(1)), "not a date", backend_ts(Duration::minutes(5))],
                "prices": [100.0, 101.0, null],
            }));
        })
        .await;

    let series = connector(&server)
        .history(&Symbol::new("sol"), Timeframe::Week)
        .await
        .unwrap();

    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].price, 100.0);
}

#[tokio::test]
async fn mismatched_arrays_surface_as_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/crypto/ada/history");
            then.status(200).json_body(json!({
                "timestamps": [backend_ts(Duration::hours(1))],
                "prices": [1.0, 2.0],
            }));
        })
        .await;

    let err = connector(&server)
        .history(&Symbol::new("ada"), Timeframe::Week)
        .await
        .unwrap_err();

    assert!(matches!(err, VizError::Data(_)), "got {err:?}");
}

#[tokio::test]
async fn non_success_status_is_a_source_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/crypto/btc/history");
            then.status(500).json_body(json!({"error": "Server error"}));
        })
        .await;

    let err = connector(&server)
        .history(&Symbol::new("btc"), Timeframe::Week)
        .await
        .unwrap_err();

    match err {
        VizError::Source { source_name, msg } => {
            assert_eq!(source_name, RestConnector::NAME);
            assert!(msg.contains("500"), "message should carry the status: {msg}");
        }
        other => panic!("expected source error, got {other:?}"),
    }
}

#[tokio::test]
async fn latest_quotes_skip_rows_with_bad_timestamps() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/crypto");
            then.status(200).json_body(json!({
                "data": [
                    {
                        "symbol": "BTC",
                        "name": "Bitcoin",
                        "price": 50_000.0,
                        "market_cap": 1.0e12,
                        "volume_24h": 3.0e10,
                        "percent_change_24h": 2.5,
                        "timestamp": "2023-01-01 12:00:00",
                    },
                    {
                        "symbol": "eth",
                        "name": "Ethereum",
                        "price": 3_000.0,
                        "market_cap": null,
                        "volume_24h": null,
                        "percent_change_24h": null,
                        "timestamp": "soon",
                    },
                ],
            }));
        })
        .await;

    let quotes = connector(&server).latest().await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].symbol, Symbol::new("btc"));
    assert_eq!(quotes[0].percent_change_24h, Some(2.5));
}

#[tokio::test]
async fn sentiment_overview_round_trips() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sentiment/overall");
            then.status(200).json_body(json!({
                "sentiment": 65.2,
                "social_sentiment": 70.5,
                "news_sentiment": 62.1,
                "fear_greed_index": 58.0,
                "timestamp": "2023-01-01 12:00:00",
            }));
        })
        .await;

    let overview = connector(&server).sentiment().await.unwrap();
    assert_eq!(overview.sentiment, 65.2);
    assert_eq!(overview.fear_greed_index, Some(58.0));
    assert!(overview.ts.is_some());
}

#[test]
fn connector_advertises_all_capabilities() {
    let server = MockServer::start();
    let connector = connector(&server);
    assert!(connector.as_history_provider().is_some());
    assert!(connector.as_quote_provider().is_some());
    assert!(connector.as_sentiment_provider().is_some());
}
