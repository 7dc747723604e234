use crate::metrics::quantile::{quantile_sorted, sort_ascending};
use serde::{Deserialize, Serialize};

/// 5th, 50th and 95th percentile of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    /// 5th percentile.
    pub p5: f64,
    /// Median.
    pub p50: f64,
    /// 95th percentile.
    pub p95: f64,
}

impl Percentiles {
    /// Computes the three percentiles from an unordered sample.
    ///
    /// The sample is sorted once. Returns `None` when it is empty.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values {
            [] => None,
            [single] => Some(Self::constant(*single)),
            _ => {
                let mut sorted = values.to_vec();
                sort_ascending(&mut sorted);
                Self::from_sorted(&sorted)
            }
        }
    }

    /// Computes the three percentiles from a sample sorted ascending.
    #[must_use]
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        Some(Self {
            p5: quantile_sorted(sorted, 0.05)?,
            p50: quantile_sorted(sorted, 0.50)?,
            p95: quantile_sorted(sorted, 0.95)?,
        })
    }

    /// All three percentiles equal to `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self {
            p5: value,
            p50: value,
            p95: value,
        }
    }

    /// Width of the 5–95 band.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.p95 - self.p5
    }
}

/// Drawdown statistics of one trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawdown {
    /// Largest relative decline from a running peak.
    pub max_drawdown: f64,
    /// Mean of the strictly positive drawdowns.
    pub avg_drawdown: f64,
}
