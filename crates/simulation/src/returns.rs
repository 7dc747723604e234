//! Per-step return samplers.
//!
//! Every sampler draws from an injected random source so a seeded generator
//! reproduces the same returns bit for bit.

use eqsim_domain::value_objects::return_model::ReturnModel;
use rand::Rng;
use rand_distr::{Distribution, Open01};
use std::f64::consts::TAU;

/// Source of per-step returns for one trajectory.
pub trait ReturnSampler {
    /// Draws the return for the next step.
    fn next_return<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64;
}

/// Box–Muller transform of two uniforms in `(0, 1)` into a standard normal variate.
#[must_use]
pub fn box_muller(u: f64, v: f64) -> f64 {
    (-2.0 * u.ln()).sqrt() * (TAU * v).cos()
}

/// Draws one standard normal variate via Box–Muller.
///
/// Both uniforms come from the open interval, so `ln(u)` is always finite.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = Open01.sample(rng);
    let v: f64 = Open01.sample(rng);
    box_muller(u, v)
}

/// Gaussian diffusion returns: `drift + volatility * z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianReturns {
    /// Expected return per step.
    pub drift: f64,
    /// Standard deviation per step.
    pub volatility: f64,
}

impl GaussianReturns {
    /// Creates a new Gaussian sampler.
    #[must_use]
    pub fn new(drift: f64, volatility: f64) -> Self {
        Self { drift, volatility }
    }
}

impl ReturnSampler for GaussianReturns {
    fn next_return<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.drift + self.volatility * standard_normal(rng)
    }
}

/// Win/loss returns: `reward_to_risk` with probability `win_rate`, else `-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BernoulliReturns {
    /// Probability of a win.
    pub win_rate: f64,
    /// Gain on a win relative to a unit loss.
    pub reward_to_risk: f64,
}

impl BernoulliReturns {
    /// Creates a new win/loss sampler.
    #[must_use]
    pub fn new(win_rate: f64, reward_to_risk: f64) -> Self {
        Self {
            win_rate,
            reward_to_risk,
        }
    }
}

impl ReturnSampler for BernoulliReturns {
    fn next_return<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let draw: f64 = rng.random();
        if draw < self.win_rate {
            self.reward_to_risk
        } else {
            -1.0
        }
    }
}

impl ReturnSampler for ReturnModel {
    fn next_return<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        match *self {
            Self::Gaussian { drift, volatility } => {
                GaussianReturns::new(drift, volatility).next_return(rng)
            }
            Self::Bernoulli {
                win_rate,
                reward_to_risk,
            } => BernoulliReturns::new(win_rate, reward_to_risk).next_return(rng),
        }
    }
}

/// Replays a fixed list of returns in a loop, ignoring the random source.
#[derive(Debug, Clone)]
pub struct FixedReturns {
    returns: Vec<f64>,
    cursor: usize,
}

impl FixedReturns {
    /// Creates a sampler cycling through `returns`. An empty list yields zeros.
    #[must_use]
    pub fn new(returns: Vec<f64>) -> Self {
        Self { returns, cursor: 0 }
    }
}

impl ReturnSampler for FixedReturns {
    fn next_return<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> f64 {
        if self.returns.is_empty() {
            return 0.0;
        }
        let r = self.returns[self.cursor % self.returns.len()];
        self.cursor += 1;
        r
    }
}
