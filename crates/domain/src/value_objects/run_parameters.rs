use crate::error::ParameterError;
use crate::value_objects::return_model::ReturnModel;
use serde::{Deserialize, Serialize};

/// Input to a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunParameters {
    /// Number of independent trajectories.
    pub trials: usize,
    /// Time increments per trajectory; each trajectory holds `steps + 1` points.
    pub steps: usize,
    /// Starting equity of every trajectory.
    pub initial_equity: f64,
    /// Per-step return model.
    pub return_model: ReturnModel,
    /// Flat cost subtracted after the return at every step.
    pub fee_per_step: f64,
}

impl RunParameters {
    /// Creates run parameters with no fee.
    #[must_use]
    pub fn new(trials: usize, steps: usize, initial_equity: f64, return_model: ReturnModel) -> Self {
        Self {
            trials,
            steps,
            initial_equity,
            return_model,
            fee_per_step: 0.0,
        }
    }

    /// Creates run parameters for the Gaussian diffusion model.
    #[must_use]
    pub fn gaussian(
        trials: usize,
        steps: usize,
        initial_equity: f64,
        drift: f64,
        volatility: f64,
    ) -> Self {
        Self::new(
            trials,
            steps,
            initial_equity,
            ReturnModel::Gaussian { drift, volatility },
        )
    }

    /// Creates run parameters for the Bernoulli win/loss model.
    #[must_use]
    pub fn bernoulli(
        trials: usize,
        steps: usize,
        initial_equity: f64,
        win_rate: f64,
        reward_to_risk: f64,
    ) -> Self {
        Self::new(
            trials,
            steps,
            initial_equity,
            ReturnModel::Bernoulli {
                win_rate,
                reward_to_risk,
            },
        )
    }

    /// Sets the per-step fee.
    #[must_use]
    pub fn with_fee_per_step(mut self, fee: f64) -> Self {
        self.fee_per_step = fee;
        self
    }

    /// Total number of equity points a run will produce.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        (self.trials as u64).saturating_mul(self.steps as u64 + 1)
    }

    /// Checks the preconditions the engine assumes.
    ///
    /// The engine never calls this itself; it is offered to the input layer.
    pub fn validate(&self) -> Result<(), ParameterError> {
        non_negative("initial_equity", self.initial_equity)?;
        non_negative("fee_per_step", self.fee_per_step)?;

        match self.return_model {
            ReturnModel::Gaussian { drift, volatility } => {
                finite("drift", drift)?;
                non_negative("volatility", volatility)?;
            }
            ReturnModel::Bernoulli {
                win_rate,
                reward_to_risk,
            } => {
                finite("win_rate", win_rate)?;
                if !(0.0..=1.0).contains(&win_rate) {
                    return Err(ParameterError::WinRateOutOfRange(win_rate));
                }
                non_negative("reward_to_risk", reward_to_risk)?;
            }
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFiniteValue { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ParameterError::NegativeValue { field, value });
    }
    Ok(())
}
