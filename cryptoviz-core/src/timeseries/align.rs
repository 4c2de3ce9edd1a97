use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

use chrono::{DateTime, Utc};
use cryptoviz_types::{AlignedBatch, AlignedSeries, PriceSeries};

/// Merge independently-fetched, irregularly-timestamped series onto one
/// shared timeline.
///
/// - The timeline is the sorted, deduplicated union of every timestamp that
///   appears in any input series; timestamps are compared by chronological
///   value, never as strings.
/// - Invalid points (non-finite or negative prices) are dropped before
///   alignment and contribute nothing to the timeline.
/// - Duplicate timestamps within a series keep the first occurrence.
/// - Every output row is dense: gaps are filled by linear interpolation
///   between the nearest known neighbors, or by flat extrapolation past a
///   series' first/last known point. A row is `None` at an index only when
///   the series has no valid data anywhere in the window.
/// - Output rows preserve input order so legends and colors stay stable
///   across refreshes.
///
/// An empty input yields an empty batch; a fully degenerate series yields an
/// all-`None` row without disturbing the timeline or its siblings.
#[must_use]
pub fn align_series(inputs: &[PriceSeries]) -> AlignedBatch {
    let mut stamps: BTreeSet<DateTime<Utc>> = BTreeSet::new();
    let mut lookups: Vec<BTreeMap<DateTime<Utc>, f64>> = Vec::with_capacity(inputs.len());

    for series in inputs {
        let mut known: BTreeMap<DateTime<Utc>, f64> = BTreeMap::new();
        for point in &series.points {
            if !point.is_valid() {
                continue;
            }
            stamps.insert(point.ts);
            if let Entry::Vacant(slot) = known.entry(point.ts) {
                slot.insert(point.price);
            }
        }
        lookups.push(known);
    }

    let timeline: Vec<DateTime<Utc>> = stamps.into_iter().collect();
    let series = inputs
        .iter()
        .zip(&lookups)
        .map(|(input, known)| AlignedSeries {
            symbol: input.symbol.clone(),
            values: timeline.iter().map(|ts| value_at(known, *ts)).collect(),
        })
        .collect();

    AlignedBatch { timeline, series }
}

/// Resolve one timeline index for one series: exact hit, interpolation
/// between neighbors, flat extrapolation at the edges, or `None` when the
/// series is entirely absent.
fn value_at(known: &BTreeMap<DateTime<Utc>, f64>, ts: DateTime<Utc>) -> Option<f64> {
    if let Some(price) = known.get(&ts) {
        return Some(*price);
    }
    let before = known.range(..ts).next_back();
    let after = known.range(ts..).next();
    match (before, after) {
        (Some((&t0, &p0)), Some((&t1, &p1))) => Some(lerp(ts, t0, p0, t1, p1)),
        (Some((_, &p0)), None) => Some(p0),
        (None, Some((_, &p1))) => Some(p1),
        (None, None) => None,
    }
}

/// Linear interpolation by elapsed wall-clock fraction between two known
/// points. `t0 < ts < t1` holds by construction of the callers.
#[allow(clippy::cast_precision_loss)]
fn lerp(ts: DateTime<Utc>, t0: DateTime<Utc>, p0: f64, t1: DateTime<Utc>, p1: f64) -> f64 {
    let span = (t1 - t0).num_milliseconds() as f64;
    if span <= 0.0 {
        return p0;
    }
    let elapsed = (ts - t0).num_milliseconds() as f64;
    p0 + (p1 - p0) * (elapsed / span)
}
