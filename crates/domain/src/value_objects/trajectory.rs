use serde::{Deserialize, Serialize};

/// One simulated equity curve.
///
/// Index 0 holds the initial equity; each further element is the equity
/// after one step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    values: Vec<f64>,
}

impl Trajectory {
    /// Starts a trajectory at `initial_equity` with room for `steps` more points.
    #[must_use]
    pub fn new(initial_equity: f64, steps: usize) -> Self {
        let mut values = Vec::with_capacity(steps + 1);
        values.push(initial_equity);
        Self { values }
    }

    /// Wraps an existing sequence of equity values.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Appends the equity after the next step.
    pub fn push(&mut self, equity: f64) {
        self.values.push(equity);
    }

    /// All equity values in time order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Equity at time index `step`, if present.
    #[must_use]
    pub fn at(&self, step: usize) -> Option<f64> {
        self.values.get(step).copied()
    }

    /// Starting equity.
    #[must_use]
    pub fn initial_equity(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Equity at the last time index.
    #[must_use]
    pub fn final_equity(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Number of points (steps + 1 for a simulated path).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the trajectory holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the trajectory ends at zero equity.
    #[must_use]
    pub fn is_ruined(&self) -> bool {
        self.final_equity().is_some_and(|v| v <= 0.0)
    }

    /// Time index from which equity stays at zero through the end.
    ///
    /// `None` unless the trajectory is ruined. A trajectory that never held
    /// equity is ruined from index 0.
    #[must_use]
    pub fn ruin_step(&self) -> Option<usize> {
        if !self.is_ruined() {
            return None;
        }
        Some(
            self.values
                .iter()
                .rposition(|&v| v > 0.0)
                .map_or(0, |i| i + 1),
        )
    }
}

impl From<Vec<f64>> for Trajectory {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}
