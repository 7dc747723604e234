use crate::error::ParameterError;
use crate::value_objects::run_parameters::RunParameters;

/// Upper bounds a caller imposes before handing parameters to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    /// Maximum number of trials.
    pub max_trials: u64,
    /// Maximum number of steps per trajectory.
    pub max_steps: u64,
    /// Maximum number of equity points, `trials * (steps + 1)`.
    pub max_cells: u64,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            max_trials: 100_000,
            max_steps: 10_000,
            max_cells: 50_000_000,
        }
    }
}

impl RunLimits {
    /// Rejects parameters whose size exceeds any bound.
    pub fn check(&self, params: &RunParameters) -> Result<(), ParameterError> {
        bound("trials", params.trials as u64, self.max_trials)?;
        bound("steps", params.steps as u64, self.max_steps)?;
        bound("cells", params.cell_count(), self.max_cells)
    }
}

fn bound(what: &'static str, value: u64, limit: u64) -> Result<(), ParameterError> {
    if value > limit {
        return Err(ParameterError::LimitExceeded { what, value, limit });
    }
    Ok(())
}
