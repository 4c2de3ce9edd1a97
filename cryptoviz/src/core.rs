use std::sync::Arc;
use std::time::Duration;

use cryptoviz_core::CryptoSource;
use cryptoviz_types::{DashboardConfig, Symbol, Timeframe, VizError};

use crate::cycle::CycleSlot;

/// Orchestrator that drives render cycles against a data source.
pub struct Dashboard {
    pub(crate) source: Arc<dyn CryptoSource>,
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) cfg: DashboardConfig,
    pub(crate) cycles: CycleSlot,
}

impl Dashboard {
    /// Start building a dashboard.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The symbols fetched on every render cycle, in rendering order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }
}

/// Builder for constructing a [`Dashboard`] with custom configuration.
pub struct DashboardBuilder {
    source: Option<Arc<dyn CryptoSource>>,
    symbols: Vec<Symbol>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a builder with the tracked symbol list and default timings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            symbols: Symbol::tracked(),
            cfg: DashboardConfig::default(),
        }
    }

    /// Set the data source. Required.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn CryptoSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the symbol list. Order is preserved into the chart payloads
    /// so legends and colors stay stable.
    #[must_use]
    pub fn symbols(mut self, symbols: Vec<Symbol>) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set the history window requested on every cycle.
    #[must_use]
    pub const fn timeframe(mut self, timeframe: Timeframe) -> Self {
        self.cfg.timeframe = timeframe;
        self
    }

    /// Set or disable the per-source fetch timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set or disable the whole-cycle deadline.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Set the cadence of the periodic refresh driver.
    #[must_use]
    pub const fn refresh_interval(mut self, interval: Duration) -> Self {
        self.cfg.refresh_interval = interval;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Validate and build the dashboard.
    ///
    /// # Errors
    /// Returns `VizError::InvalidArg` when no source was provided or the
    /// symbol list is empty.
    pub fn build(self) -> Result<Dashboard, VizError> {
        let source = self
            .source
            .ok_or_else(|| VizError::InvalidArg("a data source is required".into()))?;
        if self.symbols.is_empty() {
            return Err(VizError::InvalidArg("symbol list must not be empty".into()));
        }
        Ok(Dashboard {
            source,
            symbols: self.symbols,
            cfg: self.cfg,
            cycles: CycleSlot::default(),
        })
    }
}
