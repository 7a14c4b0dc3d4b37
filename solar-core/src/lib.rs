pub mod calculations;
pub mod calculator;
pub mod format;
pub mod models;
pub mod visibility;

pub use calculations::{RevenueError, RevenueEstimator, RevenueEstimatorConfig, compute_estimate};
pub use calculator::{ProceedRequest, RevenueCalculator};
pub use models::*;
