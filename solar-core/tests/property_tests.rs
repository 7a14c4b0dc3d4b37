//! Property-based tests for the revenue estimator
//!
//! Uses proptest to verify the invariants of monthly and annual revenue.

use proptest::prelude::*;
use rust_decimal::Decimal;
use solar_core::{InputPolicy, RevenueEstimator, RevenueEstimatorConfig, RevenueInputs, compute_estimate};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-negative decimal with two fractional digits, up to `max_whole`.
fn amount_strategy(max_whole: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_whole * 100).prop_map(|cents| Decimal::new(cents, 2))
}

/// Sharing percentage in [0, 100] with one fractional digit.
fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1000).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Any decimal in [-1000, 1000], used to exercise the clamp policy.
fn raw_value_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000i64..=100_000).prop_map(|cents| Decimal::new(cents, 2))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The annual figure is exactly twelve rounded months
    #[test]
    fn annual_is_twelve_months(
        surplus in amount_strategy(100),
        price in amount_strategy(2000),
        pct in percentage_strategy(),
    ) {
        let estimate = compute_estimate(surplus, price, pct).unwrap();
        prop_assert_eq!(estimate.annual_revenue, estimate.monthly_revenue * Decimal::from(12));
    }

    /// Non-negative inputs never produce negative revenue
    #[test]
    fn revenue_is_non_negative(
        surplus in amount_strategy(100),
        price in amount_strategy(2000),
        pct in percentage_strategy(),
    ) {
        let estimate = compute_estimate(surplus, price, pct).unwrap();
        prop_assert!(estimate.monthly_revenue >= Decimal::ZERO);
        prop_assert!(estimate.annual_revenue >= Decimal::ZERO);
    }

    /// Monthly revenue is a whole number
    #[test]
    fn monthly_is_whole(
        surplus in amount_strategy(100),
        price in amount_strategy(2000),
        pct in percentage_strategy(),
    ) {
        let estimate = compute_estimate(surplus, price, pct).unwrap();
        prop_assert_eq!(estimate.monthly_revenue.fract(), Decimal::ZERO);
    }

    /// Any zero factor zeroes the revenue
    #[test]
    fn zero_factor_yields_zero(
        surplus in amount_strategy(100),
        price in amount_strategy(2000),
        pct in percentage_strategy(),
    ) {
        prop_assert_eq!(compute_estimate(Decimal::ZERO, price, pct).unwrap().monthly_revenue, Decimal::ZERO);
        prop_assert_eq!(compute_estimate(surplus, Decimal::ZERO, pct).unwrap().monthly_revenue, Decimal::ZERO);
        prop_assert_eq!(compute_estimate(surplus, price, Decimal::ZERO).unwrap().monthly_revenue, Decimal::ZERO);
    }

    /// Raising any single input never lowers the monthly revenue
    #[test]
    fn monotonic_in_each_input(
        surplus in amount_strategy(100),
        price in amount_strategy(2000),
        pct in percentage_strategy(),
        bump in amount_strategy(50),
        pct_bump in percentage_strategy(),
    ) {
        let base = compute_estimate(surplus, price, pct).unwrap().monthly_revenue;
        let higher_pct = (pct + pct_bump).min(Decimal::ONE_HUNDRED);

        prop_assert!(compute_estimate(surplus + bump, price, pct).unwrap().monthly_revenue >= base);
        prop_assert!(compute_estimate(surplus, price + bump, pct).unwrap().monthly_revenue >= base);
        prop_assert!(compute_estimate(surplus, price, higher_pct).unwrap().monthly_revenue >= base);
    }

    /// The clamp policy always reports in-range inputs and non-negative revenue
    #[test]
    fn clamp_policy_keeps_inputs_in_range(
        surplus in raw_value_strategy(),
        price in raw_value_strategy(),
        pct in raw_value_strategy(),
    ) {
        let estimator = RevenueEstimator::new(RevenueEstimatorConfig::with_policy(InputPolicy::Clamp));
        let estimate = estimator.calculate(&RevenueInputs::new(surplus, price, pct)).unwrap();

        prop_assert!(estimate.inputs.daily_surplus_kwh >= Decimal::ZERO);
        prop_assert!(estimate.inputs.price_per_kwh >= Decimal::ZERO);
        prop_assert!(estimate.inputs.sharing_percentage >= Decimal::ZERO);
        prop_assert!(estimate.inputs.sharing_percentage <= Decimal::ONE_HUNDRED);
        prop_assert!(estimate.monthly_revenue >= Decimal::ZERO);
    }
}
