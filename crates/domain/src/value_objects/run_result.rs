use crate::value_objects::chart::{ChartData, ChartRow};
use crate::value_objects::percentiles::{Drawdown, Percentiles};
use crate::value_objects::trajectory::Trajectory;
use serde::{Deserialize, Serialize};

/// Number of raw trajectories kept for overlay plotting.
pub const SAMPLED_PATH_COUNT: usize = 8;

/// Statistics derived from one population of trajectories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Number of trajectories aggregated.
    pub trials: usize,
    /// Number of steps (longest trajectory length minus one).
    pub steps: usize,
    /// Percentiles of the final equity across all trajectories.
    pub final_equity_percentiles: Percentiles,
    /// Index of the trajectory whose final equity matches the median.
    pub representative_index: Option<usize>,
    /// Drawdown of the representative trajectory.
    pub representative_drawdown: Drawdown,
    /// Percentiles across all trajectories at each time index.
    pub step_bands: Vec<Percentiles>,
    /// The first few trajectories, verbatim.
    pub sampled_paths: Vec<Trajectory>,
    /// Mean final equity.
    pub mean_final_equity: f64,
    /// Fraction of trajectories that ended at zero equity.
    pub ruin_probability: f64,
}

impl RunResult {
    /// Builds one chart row per time index.
    ///
    /// A sampled path shorter than the band series contributes no value for
    /// the missing indices.
    #[must_use]
    pub fn chart_rows(&self) -> Vec<ChartRow> {
        self.step_bands
            .iter()
            .enumerate()
            .map(|(step, band)| {
                let paths = self.sampled_paths.iter().map(|p| p.at(step)).collect();
                ChartRow::new(step, *band, paths)
            })
            .collect()
    }

    /// Builds the full document handed to the chart renderer.
    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        ChartData {
            rows: self.chart_rows(),
            final_equity_percentiles: self.final_equity_percentiles,
            representative_drawdown: self.representative_drawdown,
        }
    }
}
