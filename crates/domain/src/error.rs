use thiserror::Error;

/// Errors reported by the opt-in parameter validation.
///
/// The engine itself trusts its caller; these are raised only by
/// [`RunParameters::validate`](crate::value_objects::run_parameters::RunParameters::validate)
/// and [`RunLimits::check`](crate::value_objects::run_limits::RunLimits::check).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A real-valued field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFiniteValue {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field that must be non-negative is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Win rate outside `[0, 1]`.
    #[error("win rate must be within [0, 1], got {0}")]
    WinRateOutOfRange(f64),

    /// A resource bound was exceeded.
    #[error("{what} of {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        /// What was measured (trials, steps, cells).
        what: &'static str,
        /// Requested amount.
        value: u64,
        /// Configured maximum.
        limit: u64,
    },
}
