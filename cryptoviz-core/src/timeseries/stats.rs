use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cryptoviz_types::{AlignedBatch, PricePoint, PriceSeries, Symbol};

/// Series with a coefficient of variation below this behave like pegged
/// assets and are excluded from correlation.
const STABLE_CV_THRESHOLD: f64 = 0.001;

/// Volatility metrics for one symbol over a fetch window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReport {
    /// Population standard deviation of percent returns, 2 decimals.
    pub volatility: f64,
    /// Largest percent drop from a running peak, 2 decimals. Non-positive.
    pub max_drawdown: f64,
    /// Percent returns between consecutive observations.
    pub returns: Vec<f64>,
    /// Timestamp of the later observation of each return.
    pub timestamps: Vec<DateTime<Utc>>,
}

impl VolatilityReport {
    fn empty() -> Self {
        Self {
            volatility: 0.0,
            max_drawdown: 0.0,
            returns: Vec::new(),
            timestamps: Vec::new(),
        }
    }
}

/// Pairwise return correlations across the surviving symbols of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Symbols included in the matrix, in batch order.
    pub symbols: Vec<Symbol>,
    /// Row-major Pearson coefficients, 2 decimals; `None` where undefined.
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl CorrelationReport {
    fn empty() -> Self {
        Self {
            symbols: Vec::new(),
            matrix: Vec::new(),
        }
    }
}

/// Percent changes between consecutive values.
///
/// Pairs whose base value is zero or whose change is non-finite are skipped.
#[must_use]
pub fn percent_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .filter(|r| r.is_finite())
        .collect()
}

/// Volatility metrics for one raw series.
///
/// Observations are validated and sorted chronologically first; fewer than
/// two usable points yields a zeroed report rather than an error.
#[must_use]
pub fn volatility_report(series: &PriceSeries) -> VolatilityReport {
    let mut points: Vec<PricePoint> = series.points.iter().filter(|p| p.is_valid()).copied().collect();
    points.sort_by_key(|p| p.ts);
    if points.len() < 2 {
        return VolatilityReport::empty();
    }

    let mut returns = Vec::with_capacity(points.len() - 1);
    let mut timestamps = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        if pair[0].price == 0.0 {
            continue;
        }
        returns.push((pair[1].price - pair[0].price) / pair[0].price * 100.0);
        timestamps.push(pair[1].ts);
    }
    if returns.is_empty() {
        return VolatilityReport::empty();
    }

    let mut peak = f64::NEG_INFINITY;
    let mut max_drawdown: f64 = 0.0;
    for p in &points {
        peak = peak.max(p.price);
        if peak > 0.0 {
            max_drawdown = max_drawdown.min((p.price - peak) / peak * 100.0);
        }
    }

    VolatilityReport {
        volatility: round2(population_std(&returns)),
        max_drawdown: round2(max_drawdown),
        returns,
        timestamps,
    }
}

/// Pearson correlation of percent returns across an aligned batch.
///
/// Rows are excluded when they are not fully dense, carry fewer than two
/// values, belong to a stablecoin, or show a coefficient of variation below
/// the pegged-asset threshold. Fewer than two surviving symbols yields an
/// empty report.
#[must_use]
pub fn correlation_matrix(batch: &AlignedBatch) -> CorrelationReport {
    if batch.timeline.len() < 2 {
        return CorrelationReport::empty();
    }

    let mut symbols = Vec::new();
    let mut returns: Vec<Vec<f64>> = Vec::new();
    for row in &batch.series {
        if row.symbol.is_stablecoin() || row.values.len() < 2 {
            continue;
        }
        let Some(dense) = dense_values(&row.values) else {
            continue;
        };
        let mean = dense.iter().sum::<f64>() / dense.len() as f64;
        let std = population_std(&dense);
        let cv = if mean == 0.0 { 0.0 } else { std / mean };
        if cv < STABLE_CV_THRESHOLD {
            continue;
        }
        symbols.push(row.symbol.clone());
        returns.push(dense_returns(&dense));
    }

    if symbols.len() < 2 {
        return CorrelationReport::empty();
    }

    let matrix = returns
        .iter()
        .map(|a| returns.iter().map(|b| pearson(a, b)).collect())
        .collect();
    CorrelationReport { symbols, matrix }
}

/// A fully dense row as plain values, or `None` if any gap exists.
fn dense_values(values: &[Option<f64>]) -> Option<Vec<f64>> {
    values.iter().copied().collect()
}

/// Consecutive percent changes with positions preserved; a zero base yields
/// `NaN` so the downstream correlation reports `None` instead of a bogus 0.
fn dense_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| {
            if w[0] == 0.0 {
                f64::NAN
            } else {
                (w[1] - w[0]) / w[0] * 100.0
            }
        })
        .collect()
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return None;
    }
    let n = a.len() as f64;
    let ma = a.iter().sum::<f64>() / n;
    let mb = b.iter().sum::<f64>() / n;
    let cov = a.iter().zip(b).map(|(x, y)| (x - ma) * (y - mb)).sum::<f64>() / n;
    let sa = population_std(a);
    let sb = population_std(b);
    let r = cov / (sa * sb);
    if r.is_finite() {
        Some(round2(r.clamp(-1.0, 1.0)))
    } else {
        None
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptoviz_types::{AlignedSeries, PricePoint};

    fn t(sec: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(sec, 0).unwrap()
    }

    fn raw(symbol: &str, points: &[(i64, f64)]) -> PriceSeries {
        PriceSeries::new(
            Symbol::new(symbol),
            points
                .iter()
                .map(|&(sec, price)| PricePoint::new(t(sec), price))
                .collect(),
        )
    }

    #[test]
    fn percent_returns_skips_zero_bases() {
        assert_eq!(percent_returns(&[100.0, 110.0]), vec![10.0]);
        assert!(percent_returns(&[0.0, 10.0]).is_empty());
    }

    #[test]
    fn volatility_of_short_series_is_zeroed() {
        let report = volatility_report(&raw("btc", &[(0, 100.0)]));
        assert_eq!(report, VolatilityReport::empty());
    }

    #[test]
    fn volatility_matches_hand_computed_values() {
        // Returns: +10%, -10%; population std = 10.
        let report = volatility_report(&raw("btc", &[(0, 100.0), (60, 110.0), (120, 99.0)]));
        assert_eq!(report.volatility, 10.0);
        // Peak 110, trough 99 -> -10%.
        assert_eq!(report.max_drawdown, -10.0);
        assert_eq!(report.timestamps, vec![t(60), t(120)]);
    }

    #[test]
    fn volatility_sorts_unsorted_input() {
        let sorted = volatility_report(&raw("btc", &[(0, 100.0), (60, 110.0)]));
        let shuffled = volatility_report(&raw("btc", &[(60, 110.0), (0, 100.0)]));
        assert_eq!(sorted, shuffled);
    }

    fn aligned(rows: Vec<(&str, Vec<Option<f64>>)>, len: usize) -> AlignedBatch {
        AlignedBatch {
            timeline: (0..len as i64).map(t).collect(),
            series: rows
                .into_iter()
                .map(|(symbol, values)| AlignedSeries {
                    symbol: Symbol::new(symbol),
                    values,
                })
                .collect(),
        }
    }

    #[test]
    fn perfectly_correlated_series_score_one() {
        let batch = aligned(
            vec![
                ("btc", vec![Some(100.0), Some(110.0), Some(132.0)]),
                ("eth", vec![Some(10.0), Some(11.0), Some(13.2)]),
            ],
            3,
        );
        let report = correlation_matrix(&batch);
        assert_eq!(report.symbols.len(), 2);
        assert_eq!(report.matrix[0][1], Some(1.0));
        assert_eq!(report.matrix[1][0], Some(1.0));
        assert_eq!(report.matrix[0][0], Some(1.0));
    }

    #[test]
    fn pegged_rows_and_gappy_rows_are_excluded() {
        let batch = aligned(
            vec![
                ("btc", vec![Some(100.0), Some(110.0), Some(121.0)]),
                ("eth", vec![Some(10.0), None, Some(12.1)]),
                ("usdt", vec![Some(1.0), Some(1.0), Some(1.0)]),
                ("dai", vec![Some(1.0), Some(1.0000001), Some(1.0)]),
            ],
            3,
        );
        let report = correlation_matrix(&batch);
        // Only btc survives, which is below the two-symbol minimum.
        assert_eq!(report, CorrelationReport::empty());
    }

    #[test]
    fn anti_correlated_series_score_minus_one() {
        let batch = aligned(
            vec![
                ("btc", vec![Some(100.0), Some(110.0), Some(100.0)]),
                ("sol", vec![Some(50.0), Some(45.0), Some(50.0)]),
            ],
            3,
        );
        let report = correlation_matrix(&batch);
        let r = report.matrix[0][1].unwrap();
        assert!(r < -0.9, "expected strong anti-correlation, got {r}");
    }
}
