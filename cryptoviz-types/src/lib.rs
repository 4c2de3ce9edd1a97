//! Cryptoviz-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod chart;
mod config;
mod error;
mod market;
mod series;
mod symbol;

pub use chart::{ChartDataset, ChartPayload};
pub use config::{DashboardConfig, ScalePolicy, Timeframe};
pub use error::VizError;
pub use market::{Quote, SentimentOverview};
pub use series::{AlignedBatch, AlignedSeries, NormalizedSeries, PricePoint, PriceSeries};
pub use symbol::Symbol;
