//! Display formatting for revenue figures.

use rust_decimal::Decimal;

/// Currency unit shown after revenue figures when none is configured.
pub const DEFAULT_CURRENCY_UNIT: &str = "GNF";

/// Formats `value` with `,` between groups of three integer digits.
///
/// The fractional part, if any, is kept as-is.
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::format::group_thousands;
///
/// assert_eq!(group_thousands(dec!(230400)), "230,400");
/// assert_eq!(group_thousands(dec!(-1234567.5)), "-1,234,567.5");
/// assert_eq!(group_thousands(dec!(999)), "999");
/// ```
pub fn group_thousands(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a revenue figure with thousands separators and a unit suffix.
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(19200), "GNF"), "19,200 GNF");
/// ```
pub fn format_currency(
    value: Decimal,
    unit: &str,
) -> String {
    let amount = group_thousands(value);
    if unit.is_empty() {
        amount
    } else {
        format!("{amount} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn group_thousands_leaves_small_values_alone() {
        assert_eq!(group_thousands(dec!(0)), "0");
        assert_eq!(group_thousands(dec!(12)), "12");
        assert_eq!(group_thousands(dec!(999)), "999");
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(dec!(1000)), "1,000");
        assert_eq!(group_thousands(dec!(19200)), "19,200");
        assert_eq!(group_thousands(dec!(540000)), "540,000");
        assert_eq!(group_thousands(dec!(1234567)), "1,234,567");
    }

    #[test]
    fn group_thousands_handles_negative_values() {
        assert_eq!(group_thousands(dec!(-19200)), "-19,200");
        assert_eq!(group_thousands(dec!(-100)), "-100");
    }

    #[test]
    fn group_thousands_drops_trailing_zero_scale() {
        assert_eq!(group_thousands(dec!(19200.00)), "19,200");
    }

    #[test]
    fn group_thousands_keeps_fraction() {
        assert_eq!(group_thousands(dec!(1234.56)), "1,234.56");
    }

    #[test]
    fn format_currency_appends_unit() {
        assert_eq!(format_currency(dec!(230400), "GNF"), "230,400 GNF");
        assert_eq!(format_currency(dec!(0), DEFAULT_CURRENCY_UNIT), "0 GNF");
    }

    #[test]
    fn format_currency_without_unit() {
        assert_eq!(format_currency(dec!(45000), ""), "45,000");
    }
}
