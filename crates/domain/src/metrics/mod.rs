pub mod drawdown;
pub mod quantile;

pub use drawdown::calculate_drawdown;
pub use quantile::{quantile, quantile_sorted};
