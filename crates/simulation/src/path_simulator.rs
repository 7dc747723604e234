//! Equity trajectory generation.
//!
//! Trajectories are independent, so generation is either a plain loop over
//! one injected random source or, for the seeded entry points, one
//! `ChaCha8Rng` stream per trial. Per-trial streams make the output depend on
//! the seed alone, whichever thread happens to produce a given trial.

use crate::cancel::CancellationFlag;
use crate::error::SimulationError;
use crate::returns::ReturnSampler;
use eqsim_domain::value_objects::run_parameters::RunParameters;
use eqsim_domain::value_objects::trajectory::Trajectory;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// How trajectories are spread over threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Single thread, trials in order.
    #[default]
    Sequential,
    /// Trials partitioned across the rayon thread pool.
    Parallel,
}

/// Applies one step: return multiplier first, then the fee, floored at zero.
#[must_use]
pub fn step_equity(equity: f64, step_return: f64, fee_per_step: f64) -> f64 {
    let next = equity * (1.0 + step_return) - fee_per_step;
    if next > 0.0 { next } else { 0.0 }
}

/// Generates one trajectory of `params.steps + 1` points.
pub fn simulate_trajectory<S, R>(params: &RunParameters, sampler: &mut S, rng: &mut R) -> Trajectory
where
    S: ReturnSampler,
    R: Rng + ?Sized,
{
    let mut path = Trajectory::new(params.initial_equity, params.steps);
    let mut equity = params.initial_equity;

    for _ in 0..params.steps {
        let r = sampler.next_return(rng);
        equity = step_equity(equity, r, params.fee_per_step);
        path.push(equity);
    }

    path
}

/// Generates `params.trials` trajectories from the injected random source.
///
/// Pure apart from the random draws: a generator seeded the same way yields
/// bit-identical output.
pub fn simulate<R: Rng + ?Sized>(params: &RunParameters, rng: &mut R) -> Vec<Trajectory> {
    let mut model = params.return_model;
    simulate_with_sampler(params, &mut model, rng)
}

/// Like [`simulate`] but draws returns from a custom sampler.
pub fn simulate_with_sampler<S, R>(
    params: &RunParameters,
    sampler: &mut S,
    rng: &mut R,
) -> Vec<Trajectory>
where
    S: ReturnSampler,
    R: Rng + ?Sized,
{
    (0..params.trials)
        .map(|_| simulate_trajectory(params, sampler, rng))
        .collect()
}

/// Random stream dedicated to one trial of a seeded run.
#[must_use]
pub fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

fn seeded_trajectory(params: &RunParameters, seed: u64, trial: usize) -> Trajectory {
    let mut model = params.return_model;
    let mut rng = trial_rng(seed, trial);
    simulate_trajectory(params, &mut model, &mut rng)
}

/// Generates trajectories on the current thread with one stream per trial.
#[must_use]
pub fn simulate_seeded(params: &RunParameters, seed: u64) -> Vec<Trajectory> {
    (0..params.trials)
        .map(|trial| seeded_trajectory(params, seed, trial))
        .collect()
}

/// Generates trajectories across the rayon pool.
///
/// Output is identical to [`simulate_seeded`] with the same seed; only the
/// final collect synchronises the workers.
#[must_use]
pub fn simulate_parallel(params: &RunParameters, seed: u64) -> Vec<Trajectory> {
    debug!(
        trials = params.trials,
        threads = rayon::current_num_threads(),
        "Partitioning trials across worker threads"
    );

    (0..params.trials)
        .into_par_iter()
        .map(|trial| seeded_trajectory(params, seed, trial))
        .collect()
}

/// Seeded generation that can be aborted through `cancel`.
///
/// The flag is checked before each trajectory. When it trips, all partial
/// output is discarded and [`SimulationError::Cancelled`] is returned.
pub fn simulate_cancellable(
    params: &RunParameters,
    seed: u64,
    execution: Execution,
    cancel: &CancellationFlag,
) -> Result<Vec<Trajectory>, SimulationError> {
    let requested = params.trials;
    let completed = AtomicUsize::new(0);

    let generate = |trial: usize| -> Option<Trajectory> {
        if cancel.is_cancelled() {
            return None;
        }
        let path = seeded_trajectory(params, seed, trial);
        completed.fetch_add(1, Ordering::Relaxed);
        Some(path)
    };

    let paths: Option<Vec<Trajectory>> = match execution {
        Execution::Sequential => (0..requested).map(generate).collect(),
        Execution::Parallel => (0..requested).into_par_iter().map(generate).collect(),
    };

    paths.ok_or_else(|| SimulationError::Cancelled {
        completed: completed.load(Ordering::Relaxed),
        requested,
    })
}
