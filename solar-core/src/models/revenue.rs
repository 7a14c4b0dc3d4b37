use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three user-adjustable calculator inputs.
///
/// Missing fields deserialize to the calculator defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueInputs {
    /// Average daily exportable surplus in kWh.
    pub daily_surplus_kwh: Decimal,
    /// Sale price in monetary units per kWh.
    pub price_per_kwh: Decimal,
    /// Share of the surplus actually sold, expressed on a 0–100 scale.
    pub sharing_percentage: Decimal,
}

impl RevenueInputs {
    pub fn new(
        daily_surplus_kwh: Decimal,
        price_per_kwh: Decimal,
        sharing_percentage: Decimal,
    ) -> Self {
        Self {
            daily_surplus_kwh,
            price_per_kwh,
            sharing_percentage,
        }
    }
}

impl Default for RevenueInputs {
    fn default() -> Self {
        Self::new(Decimal::from(8), Decimal::from(200), Decimal::from(40))
    }
}

/// Result of a revenue estimate.
///
/// `annual_revenue` is always derived from the already rounded
/// `monthly_revenue`, so it is an exact multiple of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEstimate {
    /// Inputs the estimate was computed from, after any input policy.
    pub inputs: RevenueInputs,
    /// Projected revenue for one 30-day month, rounded to a whole unit.
    pub monthly_revenue: Decimal,
    /// Projected revenue for one year.
    pub annual_revenue: Decimal,
}
