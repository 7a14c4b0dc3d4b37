//! Revenue estimation for SoliBox surplus sharing.
//!
//! Projects what a household earns by selling part of its daily solar
//! surplus to neighbours.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Apply the input policy (pass-through or clamp) |
//! | 2    | Monthly energy: daily surplus × days per month (30) |
//! | 3    | Shared energy: monthly energy × sharing percentage / 100 |
//! | 4    | Gross monthly revenue: shared energy × price per kWh |
//! | 5    | Monthly revenue: step 4 rounded to a whole unit |
//! | 6    | Annual revenue: step 5 × months per year (12) |
//!
//! Rounding happens once, on the monthly figure. The annual figure is
//! derived from the rounded monthly one so that it is always an exact
//! multiple of what is displayed per month.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::calculations::compute_estimate;
//!
//! let estimate = compute_estimate(dec!(8), dec!(200), dec!(40)).unwrap();
//!
//! assert_eq!(estimate.monthly_revenue, dec!(19200));
//! assert_eq!(estimate.annual_revenue, dec!(230400));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_whole;
use crate::{InputPolicy, RevenueEstimate, RevenueInputs};

/// Errors that can occur during revenue calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RevenueError {
    /// The number of days in a month must be positive.
    #[error("days per month must be positive, got {0}")]
    InvalidDaysPerMonth(Decimal),

    /// The number of months in a year must be positive.
    #[error("months per year must be positive, got {0}")]
    InvalidMonthsPerYear(Decimal),

    /// An intermediate product did not fit in a decimal.
    #[error("revenue calculation overflowed while computing {0}")]
    Overflow(&'static str),
}

/// Configuration parameters for the revenue estimator.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::{InputPolicy, RevenueEstimatorConfig};
///
/// let config = RevenueEstimatorConfig {
///     days_per_month: dec!(30),
///     months_per_year: dec!(12),
///     policy: InputPolicy::Clamp,
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEstimatorConfig {
    /// Length of a billing month in days. The calculator assumes 30.
    pub days_per_month: Decimal,

    /// Number of months the annual figure covers.
    pub months_per_year: Decimal,

    /// Treatment of negative or out-of-range inputs.
    pub policy: InputPolicy,
}

impl Default for RevenueEstimatorConfig {
    fn default() -> Self {
        Self {
            days_per_month: Decimal::from(30),
            months_per_year: Decimal::from(12),
            policy: InputPolicy::PassThrough,
        }
    }
}

impl RevenueEstimatorConfig {
    /// Returns the default configuration with the given input policy.
    pub fn with_policy(policy: InputPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`RevenueError`] if `days_per_month` or `months_per_year` is
    /// zero or negative.
    pub fn validate(&self) -> Result<(), RevenueError> {
        if self.days_per_month <= Decimal::ZERO {
            return Err(RevenueError::InvalidDaysPerMonth(self.days_per_month));
        }
        if self.months_per_year <= Decimal::ZERO {
            return Err(RevenueError::InvalidMonthsPerYear(self.months_per_year));
        }
        Ok(())
    }
}

/// Calculator for monthly and annual surplus-sharing revenue.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::{RevenueEstimator, RevenueEstimatorConfig, RevenueInputs};
///
/// let estimator = RevenueEstimator::new(RevenueEstimatorConfig::default());
/// let inputs = RevenueInputs::new(dec!(10), dec!(150), dec!(100));
///
/// let estimate = estimator.calculate(&inputs).unwrap();
///
/// assert_eq!(estimate.monthly_revenue, dec!(45000));
/// assert_eq!(estimate.annual_revenue, dec!(540000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RevenueEstimator {
    config: RevenueEstimatorConfig,
}

impl RevenueEstimator {
    pub fn new(config: RevenueEstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RevenueEstimatorConfig {
        &self.config
    }

    /// Computes the monthly and annual revenue for `inputs`.
    ///
    /// Under [`InputPolicy::PassThrough`] negative inputs yield negative
    /// revenue; under [`InputPolicy::Clamp`] the inputs are first brought
    /// into range and the adjusted values are reported in
    /// [`RevenueEstimate::inputs`].
    ///
    /// # Errors
    ///
    /// Returns [`RevenueError`] if the configuration is invalid or an
    /// intermediate product overflows.
    pub fn calculate(
        &self,
        inputs: &RevenueInputs,
    ) -> Result<RevenueEstimate, RevenueError> {
        self.config.validate()?;

        // Step 1: input policy
        let inputs = self.config.policy.apply(*inputs);

        // Step 2: monthly energy
        let monthly_energy = self.monthly_energy(inputs.daily_surplus_kwh)?;

        // Step 3: shared energy
        let shared_energy = self.shared_energy(monthly_energy, inputs.sharing_percentage)?;

        // Steps 4 and 5: monthly revenue
        let monthly_revenue = self.monthly_revenue(shared_energy, inputs.price_per_kwh)?;

        // Step 6: annual revenue
        let annual_revenue = self.annual_revenue(monthly_revenue)?;

        debug!(
            daily_surplus_kwh = %inputs.daily_surplus_kwh,
            price_per_kwh = %inputs.price_per_kwh,
            sharing_percentage = %inputs.sharing_percentage,
            monthly_revenue = %monthly_revenue,
            annual_revenue = %annual_revenue,
            "revenue estimate computed"
        );

        Ok(RevenueEstimate {
            inputs,
            monthly_revenue,
            annual_revenue,
        })
    }

    /// Energy available over one billing month.
    fn monthly_energy(
        &self,
        daily_surplus_kwh: Decimal,
    ) -> Result<Decimal, RevenueError> {
        daily_surplus_kwh
            .checked_mul(self.config.days_per_month)
            .ok_or(RevenueError::Overflow("monthly energy"))
    }

    /// Portion of the monthly energy that is sold.
    fn shared_energy(
        &self,
        monthly_energy: Decimal,
        sharing_percentage: Decimal,
    ) -> Result<Decimal, RevenueError> {
        let fraction = sharing_percentage / Decimal::ONE_HUNDRED;
        monthly_energy
            .checked_mul(fraction)
            .ok_or(RevenueError::Overflow("shared energy"))
    }

    fn monthly_revenue(
        &self,
        shared_energy: Decimal,
        price_per_kwh: Decimal,
    ) -> Result<Decimal, RevenueError> {
        shared_energy
            .checked_mul(price_per_kwh)
            .map(round_whole)
            .ok_or(RevenueError::Overflow("monthly revenue"))
    }

    fn annual_revenue(
        &self,
        monthly_revenue: Decimal,
    ) -> Result<Decimal, RevenueError> {
        monthly_revenue
            .checked_mul(self.config.months_per_year)
            .ok_or(RevenueError::Overflow("annual revenue"))
    }
}

/// Computes an estimate with the default 30-day month, 12-month year and
/// pass-through inputs.
///
/// # Errors
///
/// Returns [`RevenueError::Overflow`] only for inputs large enough to
/// overflow a [`Decimal`].
pub fn compute_estimate(
    daily_surplus_kwh: Decimal,
    price_per_kwh: Decimal,
    sharing_percentage: Decimal,
) -> Result<RevenueEstimate, RevenueError> {
    RevenueEstimator::default().calculate(&RevenueInputs::new(
        daily_surplus_kwh,
        price_per_kwh,
        sharing_percentage,
    ))
}
