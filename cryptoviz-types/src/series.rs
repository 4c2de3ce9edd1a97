use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// A single price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation timestamp.
    pub ts: DateTime<Utc>,
    /// Observed price. Valid points carry a finite, non-negative value.
    pub price: f64,
}

impl PricePoint {
    /// Build a point from a timestamp and a price.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, price: f64) -> Self {
        Self { ts, price }
    }

    /// Whether this point may participate in alignment.
    ///
    /// Invalid points are dropped before alignment, never null-padded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}

/// One cryptocurrency's raw history as fetched from a source.
///
/// Points are not necessarily sorted or deduplicated; the aligner takes care
/// of ordering and collision handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// The ticker this series belongs to.
    pub symbol: Symbol,
    /// Raw observations in arrival order.
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from a symbol and raw points.
    #[must_use]
    pub const fn new(symbol: Symbol, points: Vec<PricePoint>) -> Self {
        Self { symbol, points }
    }

    /// `true` when the series carries no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One series projected onto a shared timeline.
///
/// `values[i]` corresponds to the batch timeline at index `i`. A `None` entry
/// occurs only when the series has no valid data anywhere in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// The ticker this row belongs to.
    pub symbol: Symbol,
    /// Dense values, one per timeline entry.
    pub values: Vec<Option<f64>>,
}

/// The result of aligning a batch of series onto one timeline.
///
/// The timeline is the sorted, deduplicated union of every timestamp present
/// in any input series; rows preserve input order for stable rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedBatch {
    /// Strictly increasing shared timeline.
    pub timeline: Vec<DateTime<Utc>>,
    /// One aligned row per input series, in input order.
    pub series: Vec<AlignedSeries>,
}

impl AlignedBatch {
    /// `true` when no timestamps survived alignment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

/// An aligned series rescaled onto a comparison range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    /// The ticker this row belongs to.
    pub symbol: Symbol,
    /// Rescaled values; `None` entries survive normalization untouched.
    pub values: Vec<Option<f64>>,
}
