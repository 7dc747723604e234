use serde::{Deserialize, Serialize};

/// Statistical model for the per-step return of a trajectory.
///
/// Both variants draw i.i.d. returns; no state carries from one step to the
/// next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReturnModel {
    /// Gaussian diffusion: `r = drift + volatility * z` with `z ~ N(0, 1)`.
    #[serde(rename_all = "camelCase")]
    Gaussian {
        /// Expected return per step.
        drift: f64,
        /// Standard deviation of the return per step.
        volatility: f64,
    },
    /// Win/loss model: a win returns `reward_to_risk`, a loss returns `-1`.
    #[serde(rename_all = "camelCase")]
    Bernoulli {
        /// Probability of a winning step, in `[0, 1]`.
        win_rate: f64,
        /// Gain on a win relative to a unit loss.
        reward_to_risk: f64,
    },
}

impl ReturnModel {
    /// Expected per-step return under this model.
    #[must_use]
    pub fn expected_return(&self) -> f64 {
        match *self {
            Self::Gaussian { drift, .. } => drift,
            Self::Bernoulli {
                win_rate,
                reward_to_risk,
            } => win_rate * reward_to_risk - (1.0 - win_rate),
        }
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gaussian { .. } => "gaussian",
            Self::Bernoulli { .. } => "bernoulli",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_return() {
        let gaussian = ReturnModel::Gaussian {
            drift: 0.001,
            volatility: 0.02,
        };
        assert_eq!(gaussian.expected_return(), 0.001);

        let coin_flip = ReturnModel::Bernoulli {
            win_rate: 0.5,
            reward_to_risk: 2.0,
        };
        assert!((coin_flip.expected_return() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serde_tagging() {
        let model = ReturnModel::Bernoulli {
            win_rate: 0.4,
            reward_to_risk: 1.5,
        };
        let json = serde_json::to_value(model).unwrap();
        assert_eq!(json["kind"], "bernoulli");
        assert_eq!(json["winRate"], 0.4);
        assert_eq!(json["rewardToRisk"], 1.5);

        let back: ReturnModel = serde_json::from_value(json).unwrap();
        assert_eq!(back, model);
    }
}
