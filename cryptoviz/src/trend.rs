use chrono::{DateTime, Utc};
use futures::future;
use tracing::{debug, warn};

use cryptoviz_core::source::HistoryProvider;
use cryptoviz_core::{align_series, normalize_batch};
use cryptoviz_types::{
    AlignedBatch, ChartPayload, PriceSeries, ScalePolicy, Symbol, VizError,
};

use crate::core::Dashboard;

/// The immutable result of one render cycle.
///
/// Everything the rendering surface needs is derived here once; nothing in a
/// snapshot is mutated after construction, and each refresh produces a fresh
/// one.
#[derive(Debug, Clone)]
pub struct TrendSnapshot {
    /// Cycle generation, claimed when the fetch batch started.
    pub generation: u64,
    /// When the cycle completed.
    pub fetched_at: DateTime<Utc>,
    /// The aligned matrix the payloads were derived from.
    pub aligned: AlignedBatch,
    /// Payload scaled against each series' maximum (floor fixed at 0).
    pub zero_based: ChartPayload,
    /// Payload scaled between each series' own min and max.
    pub min_max: ChartPayload,
}

impl Dashboard {
    /// Run one full render cycle: fetch every symbol concurrently, join
    /// all-or-nothing, align, and normalize under both scaling policies.
    ///
    /// On success the snapshot is also installed as [`Self::latest_trend`]
    /// unless a newer cycle finished first, in which case the stale result
    /// is returned to the caller but not stored.
    ///
    /// # Errors
    /// - `VizError::Unsupported` when the source has no history capability.
    /// - `VizError::FetchFailed` when any individual fetch fails or times
    ///   out; the cycle produces no partial chart.
    /// - `VizError::RequestTimeout` when the whole cycle exceeds the
    ///   configured deadline.
    pub async fn refresh_trend(&self) -> Result<TrendSnapshot, VizError> {
        let generation = self.cycles.begin();
        let aligned = self.fetch_aligned().await?;

        let zero_based = ChartPayload::from_normalized(
            &aligned.timeline,
            &normalize_batch(&aligned, ScalePolicy::ZeroBased),
        );
        let min_max = ChartPayload::from_normalized(
            &aligned.timeline,
            &normalize_batch(&aligned, ScalePolicy::MinMax),
        );

        let snapshot = TrendSnapshot {
            generation,
            fetched_at: Utc::now(),
            aligned,
            zero_based,
            min_max,
        };
        if !self.cycles.install(snapshot.clone()) {
            debug!(generation, "superseded render cycle discarded");
        }
        Ok(snapshot)
    }

    /// The newest completed snapshot, if any. Failed cycles never clear it.
    #[must_use]
    pub fn latest_trend(&self) -> Option<TrendSnapshot> {
        self.cycles.latest()
    }

    pub(crate) async fn fetch_aligned(&self) -> Result<AlignedBatch, VizError> {
        let batch = self.fetch_history_batch().await?;
        Ok(align_series(&batch))
    }

    /// Fetch every symbol concurrently and join all-or-nothing.
    pub(crate) async fn fetch_history_batch(&self) -> Result<Vec<PriceSeries>, VizError> {
        let provider = self
            .source
            .as_history_provider()
            .ok_or_else(|| VizError::unsupported("history"))?;

        let join = async {
            let fetches = self
                .symbols
                .iter()
                .map(|symbol| self.fetch_one(provider, symbol));
            future::join_all(fetches).await
        };
        let results = match self.cfg.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, join)
                .await
                .map_err(|_| VizError::request_timeout("history"))?,
            None => join.await,
        };

        let mut failures = Vec::new();
        let mut batch = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(series) => batch.push(series),
                Err(e) => failures.push(e),
            }
        }
        if failures.is_empty() {
            Ok(batch)
        } else {
            warn!(
                failed = failures.len(),
                total = self.symbols.len(),
                "abandoning render cycle, no partial chart"
            );
            Err(VizError::FetchFailed(failures))
        }
    }

    /// One fetch, bounded by the per-source timeout when configured.
    pub(crate) async fn fetch_one(
        &self,
        provider: &dyn HistoryProvider,
        symbol: &Symbol,
    ) -> Result<PriceSeries, VizError> {
        let fetch = provider.history(symbol, self.cfg.timeframe);
        match self.cfg.provider_timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => Err(VizError::source_timeout(self.source.name(), "history")),
            },
            None => fetch.await,
        }
    }
}
