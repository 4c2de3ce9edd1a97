use std::sync::Arc;

use cryptoviz::{Dashboard, ScalePolicy, Timeframe};
use cryptoviz_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a dashboard over the deterministic mock source.
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .timeframe(Timeframe::Week)
        .build()?;

    // 2. Run one render cycle: fetch, align, normalize.
    let snapshot = dashboard.refresh_trend().await?;
    println!(
        "generation {} aligned {} series over {} shared timestamps",
        snapshot.generation,
        snapshot.aligned.series.len(),
        snapshot.aligned.timeline.len()
    );

    // 3. Print the first few normalized values per series.
    println!("\n## {:?} view:", ScalePolicy::MinMax);
    for dataset in &snapshot.min_max.datasets {
        let head: Vec<String> = dataset
            .data
            .iter()
            .take(5)
            .map(|v| v.map_or_else(|| "null".into(), |v| format!("{v:.1}")))
            .collect();
        println!(" - {:>5}: [{}, ...]", dataset.label, head.join(", "));
    }

    Ok(())
}
