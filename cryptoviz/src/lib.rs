//! Cryptoviz orchestrates the render cycles of a multi-series crypto
//! dashboard.
//!
//! Overview
//! - Fetches history for every tracked symbol concurrently from a pluggable
//!   [`cryptoviz_core::CryptoSource`].
//! - Joins the batch all-or-nothing: one failed fetch abandons the whole
//!   cycle so the comparison view never renders a partial chart.
//! - Runs the pure align → normalize pipeline and assembles the two
//!   [`ChartPayload`]s (zero-based and min-max) for the rendering surface.
//! - Tags every cycle with a generation and installs results only if they
//!   are newer than the stored snapshot, so a stale in-flight response can
//!   never overwrite fresher data.
//! - Offers a periodic refresh driver that keeps the previous snapshot on
//!   failure and logs instead of tearing the view down.
//!
//! Everything downstream of the payload — gap rendering, axis windowing,
//! colors, theming — belongs to the rendering surface and is out of scope.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cryptoviz::Dashboard;
//! use cryptoviz_mock::MockSource;
//!
//! # async fn run() -> Result<(), cryptoviz::VizError> {
//! let dashboard = Arc::new(
//!     Dashboard::builder()
//!         .with_source(Arc::new(MockSource::new()))
//!         .build()?,
//! );
//! let snapshot = dashboard.refresh_trend().await?;
//! println!("{} series aligned", snapshot.aligned.series.len());
//! # Ok(())
//! # }
//! ```
//!
//! See `cryptoviz/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod core;
mod cycle;
mod market;
mod refresh;
mod trend;

pub use core::{Dashboard, DashboardBuilder};
pub use cryptoviz_core::{
    AlignedBatch, AlignedSeries, ChartDataset, ChartPayload, CorrelationReport, DashboardConfig,
    NormalizedSeries, PricePoint, PriceSeries, Quote, ScalePolicy, SentimentOverview, Symbol,
    Timeframe, VizError, VolatilityReport,
};
pub use refresh::RefreshHandle;
pub use trend::TrendSnapshot;
