use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::core::Dashboard;

/// Handle for the periodic refresh task.
///
/// Dropping the handle stops the loop: a best-effort stop signal is sent and
/// the task is aborted if it hasn't finished.
pub struct RefreshHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    inner: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Request graceful shutdown of the refresh loop.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Whether the refresh loop has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the loop to exit after [`Self::stop`].
    pub async fn join(mut self) {
        self.stop();
        if let Some(handle) = self.inner.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.inner.take() {
            if !handle.is_finished() {
                handle.abort();
            }
        }
    }
}

impl Dashboard {
    /// Spawn the periodic refresh driver.
    ///
    /// The loop runs one render cycle per tick of the configured refresh
    /// interval. A failed cycle is logged and the previous snapshot is kept;
    /// the view degrades to stale data rather than tearing down.
    #[must_use]
    pub fn spawn_refresh(self: &Arc<Self>) -> RefreshHandle {
        let dashboard = Arc::clone(self);
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let inner = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(dashboard.cfg.refresh_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        match dashboard.refresh_trend().await {
                            Ok(snapshot) => info!(
                                generation = snapshot.generation,
                                points = snapshot.aligned.timeline.len(),
                                series = snapshot.aligned.series.len(),
                                "trend refreshed"
                            ),
                            Err(error) => warn!(
                                %error,
                                "trend refresh failed, keeping previous snapshot"
                            ),
                        }
                    }
                }
            }
        });
        RefreshHandle {
            stop_tx: Some(stop_tx),
            inner: Some(inner),
        }
    }
}
