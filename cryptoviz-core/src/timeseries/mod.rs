//! Time-series utilities shared by sources and the orchestrator.
//!
//! Modules include:
//! - `align`: merge irregular per-symbol series onto one shared timeline
//! - `normalize`: rescale aligned series onto a common comparison range
//! - `stats`: derived statistics (returns, volatility, correlation)
/// Alignment of irregular multi-symbol series onto a unified timeline.
pub mod align;
/// Scaling policies for side-by-side comparison of aligned series.
pub mod normalize;
/// Derived statistics over raw and aligned series.
pub mod stats;
