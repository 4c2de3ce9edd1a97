use cryptoviz_types::{AlignedBatch, AlignedSeries, NormalizedSeries, ScalePolicy};

/// Rescale one aligned series onto the comparison range of `policy`.
///
/// - `MinMax` maps the series' own min to 0 and max to 100. A constant
///   series maps every value to the midpoint 50 instead of dividing by zero.
/// - `ZeroBased` maps each value to `v / max * 100` against a fixed floor of
///   0; a degenerate all-zero series maps to 0. Windowing the visually
///   useful top slice is the renderer's job, not the normalizer's.
/// - `None` entries propagate untouched, never coerced to 0, so the
///   rendering surface can decide how to treat gaps.
/// - An all-`None` row normalizes to an all-`None` row without panicking.
#[must_use]
pub fn normalize(series: &AlignedSeries, policy: ScalePolicy) -> NormalizedSeries {
    let known: Vec<f64> = series.values.iter().flatten().copied().collect();
    let values = if known.is_empty() {
        vec![None; series.values.len()]
    } else {
        match policy {
            ScalePolicy::MinMax => {
                let lo = known.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = known.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                map_known(&series.values, |v| {
                    if hi == lo {
                        50.0
                    } else {
                        (v - lo) / (hi - lo) * 100.0
                    }
                })
            }
            ScalePolicy::ZeroBased => {
                let hi = known.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                map_known(&series.values, |v| if hi == 0.0 { 0.0 } else { v / hi * 100.0 })
            }
            // `ScalePolicy` is `#[non_exhaustive]`; both current variants are
            // handled above.
            _ => unreachable!("unknown ScalePolicy variant"),
        }
    };
    NormalizedSeries {
        symbol: series.symbol.clone(),
        values,
    }
}

/// Rescale every row of a batch under one policy, preserving row order.
#[must_use]
pub fn normalize_batch(batch: &AlignedBatch, policy: ScalePolicy) -> Vec<NormalizedSeries> {
    batch.series.iter().map(|s| normalize(s, policy)).collect()
}

fn map_known(values: &[Option<f64>], f: impl Fn(f64) -> f64) -> Vec<Option<f64>> {
    values.iter().map(|v| v.map(&f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptoviz_types::Symbol;

    fn row(values: Vec<Option<f64>>) -> AlignedSeries {
        AlignedSeries {
            symbol: Symbol::new("btc"),
            values,
        }
    }

    #[test]
    fn min_max_maps_extremes_to_bounds() {
        let out = normalize(&row(vec![Some(100.0), Some(105.0), Some(110.0)]), ScalePolicy::MinMax);
        assert_eq!(out.values, vec![Some(0.0), Some(50.0), Some(100.0)]);
    }

    #[test]
    fn zero_based_scales_against_max() {
        let out = normalize(&row(vec![Some(50.0), Some(100.0)]), ScalePolicy::ZeroBased);
        assert_eq!(out.values, vec![Some(50.0), Some(100.0)]);
    }

    #[test]
    fn constant_series_falls_back_per_policy() {
        let constant = row(vec![Some(42.0), Some(42.0)]);
        let min_max = normalize(&constant, ScalePolicy::MinMax);
        assert_eq!(min_max.values, vec![Some(50.0), Some(50.0)]);

        let zeros = row(vec![Some(0.0), Some(0.0)]);
        let zero_based = normalize(&zeros, ScalePolicy::ZeroBased);
        assert_eq!(zero_based.values, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn all_null_row_stays_all_null() {
        for policy in [ScalePolicy::MinMax, ScalePolicy::ZeroBased] {
            let out = normalize(&row(vec![None, None]), policy);
            assert_eq!(out.values, vec![None, None]);
        }
    }

    #[test]
    fn nulls_propagate_between_known_values() {
        let out = normalize(&row(vec![Some(1.0), None, Some(3.0)]), ScalePolicy::MinMax);
        assert_eq!(out.values, vec![Some(0.0), None, Some(100.0)]);
    }
}
