pub mod chart;
pub mod percentiles;
pub mod return_model;
pub mod run_limits;
pub mod run_parameters;
pub mod run_result;
pub mod trajectory;

pub use chart::{ChartData, ChartRow};
pub use percentiles::{Drawdown, Percentiles};
pub use return_model::ReturnModel;
pub use run_limits::RunLimits;
pub use run_parameters::RunParameters;
pub use run_result::RunResult;
pub use trajectory::Trajectory;
