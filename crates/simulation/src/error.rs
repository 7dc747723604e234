use eqsim_domain::error::ParameterError;
use thiserror::Error;

/// Errors returned by the fallible run entry points.
///
/// The core `simulate` and `aggregate` functions are total and never produce
/// these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The run was cancelled before every trajectory was generated.
    #[error("run cancelled after {completed} of {requested} trajectories")]
    Cancelled {
        /// Trajectories finished before the cancellation was observed.
        completed: usize,
        /// Trajectories requested.
        requested: usize,
    },

    /// Parameters were rejected by validation.
    #[error("invalid run parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
}
