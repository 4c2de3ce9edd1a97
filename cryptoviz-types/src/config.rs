//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fetch window requested for history, mapped to the upstream `days` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Timeframe {
    /// The last 24 hours.
    Day,
    /// The last 7 days. Matches the upstream default window.
    #[default]
    Week,
    /// The last 30 days.
    Month,
}

impl Timeframe {
    /// The window length in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

/// Scaling policy applied per series when building comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ScalePolicy {
    /// Scale each value against the series maximum with a fixed floor of 0.
    /// Session-scale variation clusters the output near 100; axis windowing
    /// is left to the rendering surface.
    ZeroBased,
    /// Scale each series onto [0, 100] between its own min and max.
    #[default]
    MinMax,
}

/// Configuration for the dashboard orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Per-source timeout applied to each individual fetch. `None` disables it.
    pub provider_timeout: Option<Duration>,
    /// Deadline for a whole render cycle. `None` disables it.
    pub request_timeout: Option<Duration>,
    /// Cadence of the periodic refresh driver.
    pub refresh_interval: Duration,
    /// History window requested on every cycle.
    pub timeframe: Timeframe,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Some(Duration::from_secs(5)),
            request_timeout: None,
            refresh_interval: Duration::from_secs(300),
            timeframe: Timeframe::default(),
        }
    }
}
