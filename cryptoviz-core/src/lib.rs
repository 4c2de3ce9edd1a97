//! cryptoviz-core
//!
//! Source traits and time-series utilities shared across the cryptoviz
//! workspace.
//!
//! - `source`: the `CryptoSource` trait and capability provider traits.
//! - `timeseries`: alignment, normalization, and derived statistics for
//!   multi-series comparison views.
//!
//! The time-series functions are pure: they own no state, touch no I/O, and
//! are recomputed from scratch on every render cycle. Fetching and cycle
//! management live in the orchestrator crate.
#![warn(missing_docs)]

/// Capability provider traits and the primary `CryptoSource` interface.
pub mod source;
/// Time-series utilities for aligning, normalizing, and summarizing series.
pub mod timeseries;

pub use cryptoviz_types::*;
pub use source::{CryptoSource, HistoryProvider, QuoteProvider, SentimentProvider};
pub use timeseries::align::align_series;
pub use timeseries::normalize::{normalize, normalize_batch};
pub use timeseries::stats::{
    CorrelationReport, VolatilityReport, correlation_matrix, percent_returns, volatility_report,
};
