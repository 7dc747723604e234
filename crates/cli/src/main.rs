//! Command Line Interface for the equity-path simulator.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use eqsim_domain::value_objects::run_parameters::RunParameters;
use eqsim_simulation::event::EventLog;
use eqsim_simulation::monte_carlo::MonteCarloRunner;
use eqsim_simulation::path_simulator::Execution;
use tracing::debug;

mod config;
mod output;

#[derive(Parser, Debug)]
#[command(name = "eqsim")]
#[command(about = "Monte Carlo equity-path simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate Gaussian per-step returns
    Gaussian {
        /// Expected return per step
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        drift: f64,

        /// Standard deviation of the return per step
        #[arg(long, default_value_t = 0.01)]
        volatility: f64,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Simulate win/loss per-step returns
    Bernoulli {
        /// Probability of a winning step
        #[arg(long, default_value_t = 0.5)]
        win_rate: f64,

        /// Gain on a win relative to a unit loss
        #[arg(long, default_value_t = 1.0)]
        reward_to_risk: f64,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Number of trajectories
    #[arg(short, long, default_value_t = 500)]
    trials: usize,

    /// Steps per trajectory
    #[arg(short, long, default_value_t = 100)]
    steps: usize,

    /// Starting equity
    #[arg(long, default_value_t = 10_000.0)]
    initial_equity: f64,

    /// Flat fee charged every step
    #[arg(long, default_value_t = 0.0)]
    fee: f64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Spread trials across all cores
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Band rows shown in table output
    #[arg(long, default_value_t = 11)]
    rows: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Summary and band table
    Table,
    /// Chart rows as JSON
    Json,
}

impl Commands {
    fn resolve(&self) -> (RunParameters, &RunArgs) {
        match self {
            Commands::Gaussian {
                drift,
                volatility,
                run,
            } => (
                RunParameters::gaussian(run.trials, run.steps, run.initial_equity, *drift, *volatility)
                    .with_fee_per_step(run.fee),
                run,
            ),
            Commands::Bernoulli {
                win_rate,
                reward_to_risk,
                run,
            } => (
                RunParameters::bernoulli(
                    run.trials,
                    run.steps,
                    run.initial_equity,
                    *win_rate,
                    *reward_to_risk,
                )
                .with_fee_per_step(run.fee),
                run,
            ),
        }
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (params, run) = cli.command.resolve();

    let limits = config::limits_from_env()?;
    debug!(?limits, "Loaded run limits");

    limits
        .check(&params)
        .context("Run exceeds the configured limits")?;

    let execution = if run.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let mut runner = MonteCarloRunner::new(params).with_execution(execution);
    if let Some(seed) = run.seed {
        runner = runner.with_seed(seed);
    }

    let mut log = EventLog::new();
    let result = runner
        .run_validated(&mut log)
        .context("Monte Carlo run failed")?;

    match run.format {
        OutputFormat::Table => {
            output::print_summary(&params, runner.seed, &result, &log, run.rows);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result.chart_data())?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqsim_domain::value_objects::return_model::ReturnModel;

    #[test]
    fn test_parse_gaussian() {
        let cli = Cli::try_parse_from([
            "eqsim",
            "gaussian",
            "--drift",
            "-0.001",
            "--volatility",
            "0.02",
            "--trials",
            "1000",
            "--steps",
            "250",
            "--fee",
            "1.5",
            "--seed",
            "7",
            "--parallel",
        ])
        .unwrap();

        let (params, run) = cli.command.resolve();
        assert_eq!(params.trials, 1000);
        assert_eq!(params.steps, 250);
        assert_eq!(params.fee_per_step, 1.5);
        assert_eq!(
            params.return_model,
            ReturnModel::Gaussian {
                drift: -0.001,
                volatility: 0.02,
            }
        );
        assert_eq!(run.seed, Some(7));
        assert!(run.parallel);
        assert_eq!(run.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_bernoulli_defaults() {
        let cli = Cli::try_parse_from(["eqsim", "bernoulli", "--win-rate", "0.4", "--format", "json"])
            .unwrap();

        let (params, run) = cli.command.resolve();
        assert_eq!(params.trials, 500);
        assert_eq!(params.steps, 100);
        assert_eq!(params.initial_equity, 10_000.0);
        assert_eq!(
            params.return_model,
            ReturnModel::Bernoulli {
                win_rate: 0.4,
                reward_to_risk: 1.0,
            }
        );
        assert_eq!(run.format, OutputFormat::Json);
        assert_eq!(run.seed, None);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["eqsim", "gaussian", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_resolved_parameters_validate() {
        let cli = Cli::try_parse_from(["eqsim", "bernoulli", "--win-rate", "1.5"]).unwrap();
        let (params, _) = cli.command.resolve();
        assert!(params.validate().is_err());
    }
}
