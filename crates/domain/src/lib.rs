//! Domain types for the equity-path simulator.
//!
//! This crate holds the value objects that flow between the input layer,
//! the simulation engine and the chart renderer, plus the pure metric
//! functions (quantiles and drawdown) the aggregator is built on.

/// Parameter validation errors.
pub mod error;
/// Path-level and distribution metrics.
pub mod metrics;
/// Immutable value objects.
pub mod value_objects;

pub use error::ParameterError;
