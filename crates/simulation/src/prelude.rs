//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use eqsim_simulation::prelude::*;
//!
//! let params = RunParameters::gaussian(200, 50, 10_000.0, 0.0005, 0.01);
//! let result = MonteCarloRunner::new(params)
//!     .with_seed(42)
//!     .run(&mut EventLog::new())
//!     .unwrap();
//! assert_eq!(result.step_bands.len(), 51);
//! ```

// Aggregation
pub use crate::aggregator::{aggregate, aggregate_with, par_step_bands, step_bands};

// Cancellation
pub use crate::cancel::CancellationFlag;

// Errors
pub use crate::error::SimulationError;

// Events
pub use crate::event::{EventData, EventLog, RunEvent, RunEventType};

// Monte Carlo
pub use crate::monte_carlo::{MonteCarloRunner, run_simulation};

// Path simulator
pub use crate::path_simulator::{
    Execution, simulate, simulate_cancellable, simulate_parallel, simulate_seeded,
    simulate_trajectory, simulate_with_sampler,
};

// Return samplers
pub use crate::returns::{
    BernoulliReturns, FixedReturns, GaussianReturns, ReturnSampler, box_muller, standard_normal,
};

// Domain types
pub use eqsim_domain::value_objects::{
    ChartData, ChartRow, Drawdown, Percentiles, ReturnModel, RunParameters, RunResult, Trajectory,
};
