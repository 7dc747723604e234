//! Monte Carlo equity-path simulation engine.
//!
//! This crate generates populations of synthetic equity trajectories from a
//! statistical return model and derives the distributional and drawdown
//! statistics used to chart the range of plausible outcomes:
//! - Gaussian diffusion and Bernoulli win/loss return samplers
//! - Sequential, seeded and parallel trajectory generation
//! - Cancellation between trajectories
//! - Percentile bands, final-equity percentiles and drawdown aggregation
//! - Caller-owned run event log

/// Prelude module for convenient imports.
pub mod prelude;

/// Statistics over a population of trajectories.
pub mod aggregator;
/// Cooperative cancellation.
pub mod cancel;
/// Error types.
pub mod error;
/// Run events.
pub mod event;
/// Monte Carlo runner.
pub mod monte_carlo;
/// Trajectory generation.
pub mod path_simulator;
/// Per-step return samplers.
pub mod returns;
