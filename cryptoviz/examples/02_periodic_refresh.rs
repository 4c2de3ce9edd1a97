use std::sync::Arc;
use std::time::Duration;

use cryptoviz::Dashboard;
use cryptoviz_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. A dashboard that refreshes every second (the real cadence is 5 min).
    let dashboard = Arc::new(
        Dashboard::builder()
            .with_source(Arc::new(MockSource::new()))
            .refresh_interval(Duration::from_secs(1))
            .build()?,
    );

    // 2. Spawn the driver and let a few cycles run.
    let handle = dashboard.spawn_refresh();
    tokio::time::sleep(Duration::from_millis(3500)).await;

    // 3. Read the newest snapshot; failed cycles would have kept the previous one.
    if let Some(snapshot) = dashboard.latest_trend() {
        println!(
            "latest snapshot: generation {}, fetched at {}",
            snapshot.generation, snapshot.fetched_at
        );
    }

    // 4. Stop the driver and wait for it to wind down.
    handle.join().await;
    Ok(())
}
