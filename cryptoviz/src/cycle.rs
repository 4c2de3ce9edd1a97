use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::trend::TrendSnapshot;

/// Generation counter plus the newest completed snapshot.
///
/// A render cycle takes its generation when it starts, not when it finishes.
/// Installation keeps only strictly newer snapshots, so a slow superseded
/// cycle that completes late is discarded instead of overwriting fresher
/// data. This replaces request cancellation: stale fetches are allowed to
/// finish, their results just never land.
#[derive(Default)]
pub(crate) struct CycleSlot {
    next: AtomicU64,
    latest: RwLock<Option<TrendSnapshot>>,
}

impl CycleSlot {
    /// Claim the generation for a cycle that is starting now.
    pub(crate) fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Store `snapshot` unless a newer generation already landed.
    /// Returns whether the snapshot was installed.
    pub(crate) fn install(&self, snapshot: TrendSnapshot) -> bool {
        let mut slot = self
            .latest
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let newer = slot
            .as_ref()
            .is_none_or(|current| current.generation < snapshot.generation);
        if newer {
            *slot = Some(snapshot);
        }
        newer
    }

    /// The newest installed snapshot, if any cycle completed yet.
    pub(crate) fn latest(&self) -> Option<TrendSnapshot> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
