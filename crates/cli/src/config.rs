//! Environment-driven configuration.

use anyhow::{Context, Result};
use eqsim_domain::value_objects::run_limits::RunLimits;
use std::env;

/// Variable bounding the number of trials.
pub const MAX_TRIALS_VAR: &str = "EQSIM_MAX_TRIALS";
/// Variable bounding the number of steps.
pub const MAX_STEPS_VAR: &str = "EQSIM_MAX_STEPS";
/// Variable bounding the number of equity points, `trials * (steps + 1)`.
pub const MAX_CELLS_VAR: &str = "EQSIM_MAX_CELLS";

/// Reads run limits from the process environment.
pub fn limits_from_env() -> Result<RunLimits> {
    limits_from_lookup(|key| env::var(key).ok())
}

/// Reads run limits through `lookup`, falling back to the defaults for unset keys.
pub fn limits_from_lookup<F>(lookup: F) -> Result<RunLimits>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RunLimits::default();

    let read = |key: &str, default: u64| -> Result<u64> {
        match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}")),
            None => Ok(default),
        }
    };

    Ok(RunLimits {
        max_trials: read(MAX_TRIALS_VAR, defaults.max_trials)?,
        max_steps: read(MAX_STEPS_VAR, defaults.max_steps)?,
        max_cells: read(MAX_CELLS_VAR, defaults.max_cells)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let limits = limits_from_lookup(|_| None).unwrap();
        assert_eq!(limits, RunLimits::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [(MAX_TRIALS_VAR, "250"), (MAX_CELLS_VAR, " 1000 ")]
            .into_iter()
            .collect();
        let limits = limits_from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(limits.max_trials, 250);
        assert_eq!(limits.max_steps, RunLimits::default().max_steps);
        assert_eq!(limits.max_cells, 1000);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let err = limits_from_lookup(|k| (k == MAX_STEPS_VAR).then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(MAX_STEPS_VAR));
    }
}
