//! Statistics over a population of trajectories.
//!
//! Aggregation only starts once every trajectory exists: each step band
//! needs the value of all trajectories at that index.

use crate::path_simulator::Execution;
use eqsim_domain::metrics::drawdown::calculate_drawdown;
use eqsim_domain::metrics::quantile::sort_ascending;
use eqsim_domain::value_objects::percentiles::Percentiles;
use eqsim_domain::value_objects::run_result::{RunResult, SAMPLED_PATH_COUNT};
use eqsim_domain::value_objects::trajectory::Trajectory;
use rayon::prelude::*;

/// Aggregates trajectories on the current thread.
#[must_use]
pub fn aggregate(paths: &[Trajectory]) -> RunResult {
    aggregate_with(paths, Execution::Sequential)
}

/// Aggregates trajectories, computing step bands with the given execution mode.
///
/// Both modes produce identical results.
#[must_use]
pub fn aggregate_with(paths: &[Trajectory], execution: Execution) -> RunResult {
    if paths.is_empty() {
        return RunResult::default();
    }

    let finals: Vec<f64> = paths.iter().filter_map(Trajectory::final_equity).collect();
    let final_equity_percentiles = Percentiles::from_values(&finals).unwrap_or_default();

    let representative_index = representative_index(paths, final_equity_percentiles.p50);
    let representative_drawdown = representative_index
        .map(|i| calculate_drawdown(paths[i].values()))
        .unwrap_or_default();

    let step_bands = match execution {
        Execution::Sequential => step_bands(paths),
        Execution::Parallel => par_step_bands(paths),
    };

    let (mean_final_equity, ruin_probability) = if finals.is_empty() {
        (0.0, 0.0)
    } else {
        let n = finals.len() as f64;
        let ruined = paths.iter().filter(|p| p.is_ruined()).count();
        (finals.iter().sum::<f64>() / n, ruined as f64 / n)
    };

    RunResult {
        trials: paths.len(),
        steps: step_count(paths).saturating_sub(1),
        final_equity_percentiles,
        representative_index,
        representative_drawdown,
        step_bands,
        sampled_paths: paths.iter().take(SAMPLED_PATH_COUNT).cloned().collect(),
        mean_final_equity,
        ruin_probability,
    }
}

/// Index of the trajectory whose final equity equals `target`.
///
/// Falls back to the nearest final equity when no exact match exists. Ties
/// resolve to the earliest trajectory.
#[must_use]
pub fn representative_index(paths: &[Trajectory], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, path) in paths.iter().enumerate() {
        let Some(value) = path.final_equity() else {
            continue;
        };
        if value.to_bits() == target.to_bits() {
            return Some(i);
        }
        let distance = (value - target).abs();
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((i, distance)),
        }
    }

    best.map(|(i, _)| i)
}

/// p5/p50/p95 across all trajectories at every time index.
#[must_use]
pub fn step_bands(paths: &[Trajectory]) -> Vec<Percentiles> {
    let mut column = Vec::with_capacity(paths.len());
    (0..step_count(paths))
        .map(|step| band_at(paths, step, &mut column))
        .collect()
}

/// Parallel variant of [`step_bands`], one time index per task.
#[must_use]
pub fn par_step_bands(paths: &[Trajectory]) -> Vec<Percentiles> {
    (0..step_count(paths))
        .into_par_iter()
        .map_init(
            || Vec::with_capacity(paths.len()),
            |column, step| band_at(paths, step, column),
        )
        .collect()
}

fn step_count(paths: &[Trajectory]) -> usize {
    paths.iter().map(Trajectory::len).max().unwrap_or(0)
}

fn band_at(paths: &[Trajectory], step: usize, column: &mut Vec<f64>) -> Percentiles {
    column.clear();
    column.extend(paths.iter().filter_map(|p| p.at(step)));

    // Nothing to sort for zero or one trajectory.
    if column.len() <= 1 {
        return column
            .first()
            .map_or_else(Percentiles::default, |&v| Percentiles::constant(v));
    }

    sort_ascending(column);
    Percentiles::from_sorted(column).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(rows: &[&[f64]]) -> Vec<Trajectory> {
        rows.iter().map(|r| Trajectory::from(r.to_vec())).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]), RunResult::default());
    }

    #[test]
    fn test_single_trajectory() {
        let input = paths(&[&[100.0, 120.0, 90.0]]);
        let result = aggregate(&input);

        assert_eq!(result.trials, 1);
        assert_eq!(result.steps, 2);
        assert_eq!(result.final_equity_percentiles, Percentiles::constant(90.0));
        assert_eq!(result.representative_index, Some(0));
        assert!((result.representative_drawdown.max_drawdown - 0.25).abs() < 1e-12);
        assert_eq!(result.step_bands[1], Percentiles::constant(120.0));
        assert_eq!(result.sampled_paths, input);
    }

    #[test]
    fn test_step_bands_use_all_trajectories() {
        let input = paths(&[
            &[10.0, 1.0],
            &[10.0, 2.0],
            &[10.0, 3.0],
            &[10.0, 4.0],
            &[10.0, 5.0],
        ]);
        let bands = step_bands(&input);

        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0], Percentiles::constant(10.0));
        assert!((bands[1].p5 - 1.2).abs() < 1e-12);
        assert_eq!(bands[1].p50, 3.0);
        assert!((bands[1].p95 - 4.8).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_bands_match_sequential() {
        let input: Vec<Trajectory> = (0..40)
            .map(|t| {
                let values = (0..25)
                    .map(|s| 100.0 + ((t * 31 + s * 17) % 23) as f64 - 11.0)
                    .collect::<Vec<f64>>();
                Trajectory::from(values)
            })
            .collect();

        assert_eq!(step_bands(&input), par_step_bands(&input));
        assert_eq!(
            aggregate(&input),
            aggregate_with(&input, Execution::Parallel)
        );
    }

    #[test]
    fn test_representative_exact_match_prefers_first() {
        let input = paths(&[&[1.0, 5.0], &[1.0, 3.0], &[1.0, 3.0], &[1.0, 1.0]]);
        assert_eq!(representative_index(&input, 3.0), Some(1));
    }

    #[test]
    fn test_representative_falls_back_to_nearest() {
        // Even count: median of finals 1, 2, 4, 8 is 3.0, matched by nobody.
        let input = paths(&[&[1.0, 8.0], &[1.0, 4.0], &[1.0, 2.0], &[1.0, 1.0]]);
        let result = aggregate(&input);

        assert_eq!(result.final_equity_percentiles.p50, 3.0);
        // 4.0 and 2.0 are equally close; the earlier one wins.
        assert_eq!(result.representative_index, Some(1));
    }

    #[test]
    fn test_sampled_paths_capped() {
        let input: Vec<Trajectory> = (0..20)
            .map(|i| Trajectory::from(vec![i as f64, i as f64]))
            .collect();
        let result = aggregate(&input);

        assert_eq!(result.sampled_paths.len(), SAMPLED_PATH_COUNT);
        assert_eq!(result.sampled_paths[..], input[..SAMPLED_PATH_COUNT]);
    }

    #[test]
    fn test_ruin_probability_and_mean() {
        let input = paths(&[&[10.0, 0.0], &[10.0, 20.0], &[10.0, 0.0], &[10.0, 40.0]]);
        let result = aggregate(&input);

        assert_eq!(result.ruin_probability, 0.5);
        assert_eq!(result.mean_final_equity, 15.0);
    }

    #[test]
    fn test_ragged_input_uses_available_values() {
        let input = paths(&[&[10.0, 11.0, 12.0], &[10.0]]);
        let bands = step_bands(&input);

        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0], Percentiles::constant(10.0));
        assert_eq!(bands[2], Percentiles::constant(12.0));
    }
}
