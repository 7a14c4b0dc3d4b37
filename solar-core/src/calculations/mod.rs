//! Revenue calculation modules.
//!
//! This module provides the arithmetic behind the SoliBox earnings
//! calculator: shared rounding helpers and the revenue estimator itself.

pub mod common;
pub mod revenue;

pub use revenue::{RevenueError, RevenueEstimator, RevenueEstimatorConfig, compute_estimate};
