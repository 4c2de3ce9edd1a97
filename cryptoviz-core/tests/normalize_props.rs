use cryptoviz_core::{normalize, normalize_batch};
use cryptoviz_types::{AlignedBatch, AlignedSeries, ScalePolicy, Symbol};
use proptest::prelude::*;

fn arb_row() -> impl Strategy<Value = AlignedSeries> {
    proptest::collection::vec(prop::option::of(0.0f64..1_000_000.0f64), 0..120).prop_map(|values| {
        AlignedSeries {
            symbol: Symbol::new("btc"),
            values,
        }
    })
}

fn arb_policy() -> impl Strategy<Value = ScalePolicy> {
    prop_oneof![Just(ScalePolicy::MinMax), Just(ScalePolicy::ZeroBased)]
}

proptest! {
    #[test]
    fn nulls_survive_and_known_values_stay_in_range(row in arb_row(), policy in arb_policy()) {
        let out = normalize(&row, policy);
        prop_assert_eq!(out.values.len(), row.values.len());
        for (input, output) in row.values.iter().zip(&out.values) {
            match (input, output) {
                (None, None) => {}
                (Some(_), Some(v)) => {
                    prop_assert!((-1e-9..=100.0 + 1e-9).contains(v), "out of range: {v}");
                }
                _ => prop_assert!(false, "null structure changed"),
            }
        }
    }

    #[test]
    fn min_max_hits_both_bounds(row in arb_row()) {
        let known: Vec<f64> = row.values.iter().flatten().copied().collect();
        prop_assume!(!known.is_empty());
        let lo = known.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = known.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(hi > lo);

        let out = normalize(&row, ScalePolicy::MinMax);
        let normalized: Vec<f64> = out.values.iter().flatten().copied().collect();
        let got_lo = normalized.iter().copied().fold(f64::INFINITY, f64::min);
        let got_hi = normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(got_lo.abs() < 1e-9, "min maps to 0, got {got_lo}");
        prop_assert!((got_hi - 100.0).abs() < 1e-9, "max maps to 100, got {got_hi}");
    }

    #[test]
    fn zero_based_is_max_relative(row in arb_row()) {
        let known: Vec<f64> = row.values.iter().flatten().copied().collect();
        prop_assume!(!known.is_empty());
        let hi = known.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(hi > 0.0);

        let out = normalize(&row, ScalePolicy::ZeroBased);
        for (input, output) in row.values.iter().zip(&out.values) {
            if let (Some(v), Some(n)) = (input, output) {
                prop_assert!((n - v / hi * 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn constant_rows_never_panic(value in 0.0f64..1_000_000.0f64, len in 1usize..50, policy in arb_policy()) {
        let row = AlignedSeries {
            symbol: Symbol::new("btc"),
            values: vec![Some(value); len],
        };
        let out = normalize(&row, policy);
        let expected = match policy {
            ScalePolicy::MinMax => 50.0,
            ScalePolicy::ZeroBased if value == 0.0 => 0.0,
            ScalePolicy::ZeroBased => 100.0,
            _ => unreachable!(),
        };
        prop_assert!(out.values.iter().all(|v| *v == Some(expected)));
    }

    #[test]
    fn batch_normalization_preserves_row_order(rows in proptest::collection::vec(arb_row(), 0..6)) {
        let len = rows.first().map_or(0, |r| r.values.len());
        let rows: Vec<AlignedSeries> = rows
            .into_iter()
            .map(|mut r| {
                r.values.resize(len, None);
                r
            })
            .collect();
        let batch = AlignedBatch { timeline: vec![], series: rows.clone() };
        let out = normalize_batch(&batch, ScalePolicy::MinMax);
        prop_assert_eq!(out.len(), rows.len());
        for (row, normalized) in rows.iter().zip(&out) {
            prop_assert_eq!(&row.symbol, &normalized.symbol);
        }
    }
}
