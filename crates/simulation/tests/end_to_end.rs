use eqsim_domain::metrics::quantile::quantile;
use eqsim_simulation::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_flat_model_produces_constant_paths() {
    let params = RunParameters::gaussian(1000, 100, 10_000.0, 0.0, 0.0);
    let paths = simulate(&params, &mut StdRng::seed_from_u64(2024));

    assert_eq!(paths.len(), 1000);
    let expected = vec![10_000.0; 101];
    assert!(paths.iter().all(|p| p.values() == expected.as_slice()));

    let result = aggregate(&paths);
    assert_eq!(
        result.final_equity_percentiles,
        Percentiles {
            p5: 10_000.0,
            p50: 10_000.0,
            p95: 10_000.0,
        }
    );
    assert_eq!(result.representative_drawdown.max_drawdown, 0.0);
    assert_eq!(result.representative_drawdown.avg_drawdown, 0.0);
    assert_eq!(result.sampled_paths.len(), 8);
    assert_eq!(result.step_bands.len(), 101);
}

#[test]
fn test_degenerate_runs() {
    let mut rng = StdRng::seed_from_u64(0);

    let empty = RunParameters::bernoulli(0, 50, 100.0, 0.5, 1.0);
    assert!(simulate(&empty, &mut rng).is_empty());
    assert_eq!(run_simulation(&empty, &mut rng), RunResult::default());

    let single_point = RunParameters::bernoulli(3, 0, 100.0, 0.5, 1.0);
    let paths = simulate(&single_point, &mut rng);
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.values() == [100.0]));

    let result = aggregate(&paths);
    assert_eq!(result.step_bands, vec![Percentiles::constant(100.0)]);
    assert_eq!(result.sampled_paths.len(), 3);
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let params = RunParameters::bernoulli(200, 60, 5_000.0, 0.55, 1.2).with_fee_per_step(2.0);

    let a = simulate(&params, &mut StdRng::seed_from_u64(17));
    let b = simulate(&params, &mut StdRng::seed_from_u64(17));
    assert_eq!(a, b);

    assert_eq!(simulate_seeded(&params, 17), simulate_parallel(&params, 17));
}

#[test]
fn test_invariants_hold_for_noisy_runs() {
    let params = RunParameters::gaussian(300, 120, 1_000.0, 0.0005, 0.05).with_fee_per_step(0.5);
    let paths = simulate_parallel(&params, 99);

    for path in &paths {
        assert_eq!(path.len(), params.steps + 1);
        assert_eq!(path.initial_equity(), Some(params.initial_equity));
        assert!(path.values().iter().all(|&v| v >= 0.0));
    }

    let result = aggregate_with(&paths, Execution::Parallel);
    for band in &result.step_bands {
        assert!(band.p5 <= band.p50);
        assert!(band.p50 <= band.p95);
    }

    let last = result.step_bands.last().copied().unwrap();
    assert_eq!(last, result.final_equity_percentiles);

    let index = result.representative_index.unwrap();
    let finals: Vec<f64> = paths.iter().filter_map(Trajectory::final_equity).collect();
    let median = quantile(&finals, 0.5).unwrap();
    let chosen = paths[index].final_equity().unwrap();
    assert!(finals
        .iter()
        .all(|v| (v - median).abs() >= (chosen - median).abs()));
}

#[test]
fn test_chart_output_shape() {
    let params = RunParameters::gaussian(12, 5, 100.0, 0.01, 0.02);
    let result = MonteCarloRunner::new(params)
        .with_seed(8)
        .run(&mut EventLog::new())
        .unwrap();

    let data = result.chart_data();
    assert_eq!(data.rows.len(), 6);

    let json = serde_json::to_value(&data).unwrap();
    let row = &json["rows"][0];
    assert_eq!(row["step"], 0);
    assert_eq!(row["p50"], 100.0);
    assert_eq!(row["bandDiff"], 0.0);
    assert_eq!(row["path7"], 100.0);
    assert!(row.get("path8").is_none());
    assert!(json["finalEquityPercentiles"]["p95"].is_number());
    assert!(json["representativeDrawdown"]["maxDrawdown"].is_number());
}
