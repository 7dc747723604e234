//! Row-oriented output for the chart renderer.
//!
//! Each row is flattened into a single JSON object so an area chart can bind
//! `bandLow` as the lower bound and `bandDiff` as the stacked height.

use crate::value_objects::percentiles::{Drawdown, Percentiles};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One time index of the band chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// Time index.
    pub step: usize,
    /// 5th percentile across all trajectories.
    pub p5: f64,
    /// Median across all trajectories.
    pub p50: f64,
    /// 95th percentile across all trajectories.
    pub p95: f64,
    /// Lower edge of the band (equal to `p5`).
    pub band_low: f64,
    /// Band height (`p95 - p5`).
    pub band_diff: f64,
    /// Equity of each sampled path at this index.
    pub paths: Vec<Option<f64>>,
}

impl ChartRow {
    /// Creates a row from the band at `step` and the sampled path values.
    #[must_use]
    pub fn new(step: usize, band: Percentiles, paths: Vec<Option<f64>>) -> Self {
        Self {
            step,
            p5: band.p5,
            p50: band.p50,
            p95: band.p95,
            band_low: band.p5,
            band_diff: band.spread(),
            paths,
        }
    }
}

impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.paths.iter().filter(|p| p.is_some()).count();
        let mut map = serializer.serialize_map(Some(6 + present))?;
        map.serialize_entry("step", &self.step)?;
        map.serialize_entry("p5", &self.p5)?;
        map.serialize_entry("p50", &self.p50)?;
        map.serialize_entry("p95", &self.p95)?;
        map.serialize_entry("bandLow", &self.band_low)?;
        map.serialize_entry("bandDiff", &self.band_diff)?;
        for (i, value) in self.paths.iter().enumerate() {
            if let Some(value) = value {
                map.serialize_entry(&format!("path{i}"), value)?;
            }
        }
        map.end()
    }
}

/// Complete output document of a run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// One row per time index.
    pub rows: Vec<ChartRow>,
    /// Percentiles of the final equity.
    pub final_equity_percentiles: Percentiles,
    /// Drawdown of the median trajectory.
    pub representative_drawdown: Drawdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_flat() {
        let band = Percentiles {
            p5: 90.0,
            p50: 100.0,
            p95: 120.0,
        };
        let row = ChartRow::new(3, band, vec![Some(101.0), None, Some(99.5)]);
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["step"], 3);
        assert_eq!(json["bandLow"], 90.0);
        assert_eq!(json["bandDiff"], 30.0);
        assert_eq!(json["path0"], 101.0);
        assert!(json.get("path1").is_none());
        assert_eq!(json["path2"], 99.5);
    }
}
