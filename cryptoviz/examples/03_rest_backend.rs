use std::sync::Arc;

use cryptoviz::{Dashboard, Symbol};
use cryptoviz_rest::RestConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Point CRYPTOVIZ_BASE_URL at a running backend, e.g. http://localhost:5000.
    let base_url = std::env::var("CRYPTOVIZ_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());

    let connector = RestConnector::builder().base_url(&base_url).build()?;
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(connector))
        .build()?;

    // Latest quotes for the tracked coins.
    let quotes = dashboard.latest_quotes().await?;
    println!("## Latest quotes ({base_url}):");
    for quote in &quotes {
        println!(" - {:>5}: ${:.2}", quote.symbol, quote.price);
    }

    // Volatility for a single coin.
    let report = dashboard.volatility(&Symbol::new("btc")).await?;
    println!(
        "\nbtc volatility {:.2}%, max drawdown {:.2}%",
        report.volatility, report.max_drawdown
    );

    // One full render cycle.
    let snapshot = dashboard.refresh_trend().await?;
    println!(
        "\naligned {} series over {} timestamps",
        snapshot.aligned.series.len(),
        snapshot.aligned.timeline.len()
    );

    Ok(())
}
