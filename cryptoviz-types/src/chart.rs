use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::NormalizedSeries;

/// One labeled line handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Legend label (the ticker).
    pub label: String,
    /// One value per payload label; `None` marks a gap the renderer may
    /// skip or bridge.
    pub data: Vec<Option<f64>>,
}

/// The contract with the downstream rendering surface.
///
/// The renderer owns gap handling, color assignment, axis windowing, and
/// theming; this payload carries only labels and datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Shared x-axis labels.
    pub labels: Vec<DateTime<Utc>>,
    /// One dataset per series, in series order.
    pub datasets: Vec<ChartDataset>,
}

impl ChartPayload {
    /// Assemble a payload from a timeline and its normalized rows.
    #[must_use]
    pub fn from_normalized(timeline: &[DateTime<Utc>], rows: &[NormalizedSeries]) -> Self {
        Self {
            labels: timeline.to_vec(),
            datasets: rows
                .iter()
                .map(|row| ChartDataset {
                    label: row.symbol.to_string(),
                    data: row.values.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn dataset_order_follows_row_order() {
        let rows = vec![
            NormalizedSeries {
                symbol: Symbol::new("btc"),
                values: vec![Some(1.0)],
            },
            NormalizedSeries {
                symbol: Symbol::new("eth"),
                values: vec![None],
            },
        ];
        let ts = DateTime::from_timestamp(0, 0).unwrap();
        let payload = ChartPayload::from_normalized(&[ts], &rows);
        assert_eq!(payload.labels, vec![ts]);
        assert_eq!(payload.datasets[0].label, "btc");
        assert_eq!(payload.datasets[1].label, "eth");
        assert_eq!(payload.datasets[1].data, vec![None]);
    }

    #[test]
    fn nulls_serialize_as_json_null() {
        let payload = ChartPayload {
            labels: vec![],
            datasets: vec![ChartDataset {
                label: "btc".into(),
                data: vec![Some(50.0), None],
            }],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("[50.0,null]"));
    }
}
