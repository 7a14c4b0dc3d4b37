//! Common utility functions for revenue calculations.
//!
//! Rounding and clamping helpers shared by the estimator and the input
//! policies.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole number using half-away-from-zero rounding.
///
/// Values at exactly `.5` move away from zero, so `0.5` becomes `1` and
/// `-0.5` becomes `-1`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(19199.4)), dec!(19199));
/// assert_eq!(round_whole(dec!(19199.5)), dec!(19200));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-3)); // Away from zero
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Restricts `value` to the inclusive range `[lo, hi]`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(150), dec!(0), dec!(100)), dec!(100));
/// assert_eq!(clamp(dec!(-3), dec!(0), dec!(100)), dec!(0));
/// assert_eq!(clamp(dec!(42.5), dec!(0), dec!(100)), dec!(42.5));
/// ```
pub fn clamp(
    value: Decimal,
    lo: Decimal,
    hi: Decimal,
) -> Decimal {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}
