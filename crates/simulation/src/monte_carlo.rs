//! Monte Carlo runner tying generation and aggregation together.

use crate::aggregator::{aggregate, aggregate_with};
use crate::cancel::CancellationFlag;
use crate::error::SimulationError;
use crate::event::{EventLog, RunEvent};
use crate::path_simulator::{Execution, simulate, simulate_cancellable};
use eqsim_domain::value_objects::run_parameters::RunParameters;
use eqsim_domain::value_objects::run_result::RunResult;
use eqsim_domain::value_objects::trajectory::Trajectory;
use rand::Rng;
use tracing::{info, warn};

/// Runs one simulation from an injected random source and aggregates it.
pub fn run_simulation<R: Rng + ?Sized>(params: &RunParameters, rng: &mut R) -> RunResult {
    aggregate(&simulate(params, rng))
}

/// Configured Monte Carlo run over one parameter set.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    /// Run parameters.
    pub params: RunParameters,
    /// Seed from which every trial stream is derived.
    pub seed: u64,
    /// Thread layout for generation and step bands.
    pub execution: Execution,
    /// Optional flag to abort the run between trajectories.
    pub cancel: Option<CancellationFlag>,
}

impl MonteCarloRunner {
    /// Creates a sequential runner with a random seed.
    #[must_use]
    pub fn new(params: RunParameters) -> Self {
        Self {
            params,
            seed: rand::rng().random(),
            execution: Execution::Sequential,
            cancel: None,
        }
    }

    /// Fixes the seed, making the run reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the execution mode.
    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Attaches a cancellation flag.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Generates the trajectories without aggregating them.
    pub fn generate(&self) -> Result<Vec<Trajectory>, SimulationError> {
        let unset = CancellationFlag::new();
        let cancel = self.cancel.as_ref().unwrap_or(&unset);
        simulate_cancellable(&self.params, self.seed, self.execution, cancel)
    }

    /// Validates the parameters, then runs like [`MonteCarloRunner::run`].
    ///
    /// Rejected parameters produce no events.
    pub fn run_validated(&self, log: &mut EventLog) -> Result<RunResult, SimulationError> {
        self.params.validate()?;
        self.run(log)
    }

    /// Runs the simulation and aggregates the result.
    ///
    /// Events are appended to `log`: one start event, one event per ruined
    /// trajectory, then a completion or cancellation event.
    pub fn run(&self, log: &mut EventLog) -> Result<RunResult, SimulationError> {
        let params = &self.params;
        info!(
            trials = params.trials,
            steps = params.steps,
            model = params.return_model.name(),
            seed = self.seed,
            execution = ?self.execution,
            "Starting Monte Carlo run"
        );
        log.record(RunEvent::run_started(
            params.trials,
            params.steps,
            params.return_model.name(),
            self.seed,
        ));

        let paths = self.generate().inspect_err(|err| {
            if let SimulationError::Cancelled {
                completed,
                requested,
            } = *err
            {
                warn!(completed, requested, "Monte Carlo run cancelled");
                log.record(RunEvent::run_cancelled(completed, requested));
            }
        })?;

        for (trial, path) in paths.iter().enumerate() {
            if let Some(step) = path.ruin_step() {
                log.record(RunEvent::trajectory_ruined(trial, step));
            }
        }

        let result = aggregate_with(&paths, self.execution);
        let percentiles = result.final_equity_percentiles;
        info!(
            p5 = percentiles.p5,
            p50 = percentiles.p50,
            p95 = percentiles.p95,
            max_drawdown = result.representative_drawdown.max_drawdown,
            ruin_probability = result.ruin_probability,
            "Monte Carlo run completed"
        );
        log.record(RunEvent::run_completed(
            percentiles,
            result.representative_drawdown.max_drawdown,
            result.ruin_probability,
        ));

        Ok(result)
    }
}
