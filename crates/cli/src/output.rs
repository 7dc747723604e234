//! Terminal rendering of run results.

use eqsim_domain::value_objects::run_parameters::RunParameters;
use eqsim_domain::value_objects::run_result::RunResult;
use eqsim_simulation::event::EventLog;
use prettytable::{Table, row};

/// Picks up to `max_rows` evenly spaced indices out of `len`, always keeping
/// the first and last.
#[must_use]
pub fn sample_steps(len: usize, max_rows: usize) -> Vec<usize> {
    if len == 0 || max_rows == 0 {
        return Vec::new();
    }
    if len <= max_rows {
        return (0..len).collect();
    }
    if max_rows == 1 {
        return vec![len - 1];
    }

    let last = len - 1;
    let mut steps: Vec<usize> = (0..max_rows)
        .map(|i| i * last / (max_rows - 1))
        .collect();
    steps.dedup();
    steps
}

/// Builds the percentile band table for the sampled steps.
#[must_use]
pub fn band_table(result: &RunResult, max_rows: usize) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Step", "P5", "P50", "P95", "Band"]);

    for step in sample_steps(result.step_bands.len(), max_rows) {
        let band = result.step_bands[step];
        table.add_row(row![
            step,
            format!("{:.2}", band.p5),
            format!("{:.2}", band.p50),
            format!("{:.2}", band.p95),
            format!("{:.2}", band.spread()),
        ]);
    }

    table
}

/// Prints the human-readable summary of a run.
pub fn print_summary(
    params: &RunParameters,
    seed: u64,
    result: &RunResult,
    log: &EventLog,
    max_rows: usize,
) {
    let finals = result.final_equity_percentiles;
    let drawdown = result.representative_drawdown;

    println!("\n📊 Monte Carlo Results ({})", params.return_model.name());
    println!("════════════════════════════════════");
    println!("Trials:          {}", result.trials);
    println!("Steps:           {}", result.steps);
    println!("Seed:            {}", seed);
    println!("Initial Equity:  {:.2}", params.initial_equity);
    println!(
        "Expected Return: {:.4}% per step",
        params.return_model.expected_return() * 100.0
    );
    println!("Final P5:        {:.2}", finals.p5);
    println!("Final P50:       {:.2}", finals.p50);
    println!("Final P95:       {:.2}", finals.p95);
    println!("Mean Final:      {:.2}", result.mean_final_equity);
    println!("Max Drawdown:    {:.2}%", drawdown.max_drawdown * 100.0);
    println!("Avg Drawdown:    {:.2}%", drawdown.avg_drawdown * 100.0);
    println!(
        "Ruined:          {} ({:.1}%)",
        log.ruin_count(),
        result.ruin_probability * 100.0
    );
    println!("════════════════════════════════════\n");

    if !result.step_bands.is_empty() {
        band_table(result, max_rows).printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqsim_domain::value_objects::percentiles::Percentiles;

    #[test]
    fn test_sample_steps() {
        assert_eq!(sample_steps(0, 5), Vec::<usize>::new());
        assert_eq!(sample_steps(3, 5), vec![0, 1, 2]);
        assert_eq!(sample_steps(101, 5), vec![0, 25, 50, 75, 100]);
        assert_eq!(sample_steps(10, 1), vec![9]);
        assert_eq!(sample_steps(10, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_band_table_rows() {
        let result = RunResult {
            step_bands: vec![Percentiles::constant(1.0); 21],
            ..RunResult::default()
        };
        let table = band_table(&result, 5);
        assert_eq!(table.len(), 5);
    }
}
