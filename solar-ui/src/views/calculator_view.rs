use solar_core::format::{format_currency, group_thousands};
use solar_core::{RevenueEstimate, RevenueInputs, ThemeMode};

/// Presentation settings passed down to every view.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub currency_unit: &'a str,
    pub theme: ThemeMode,
}

const RULE_WIDTH: usize = 36;

fn rule(theme: ThemeMode) -> String {
    let ch = if theme.is_dark() { '═' } else { '─' };
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

fn input_lines(
    inputs: &RevenueInputs,
    ctx: &ViewContext<'_>,
) -> Vec<String> {
    vec![
        format!(
            "  {:<18}{} kWh/day",
            "Daily surplus",
            group_thousands(inputs.daily_surplus_kwh)
        ),
        format!(
            "  {:<18}{}",
            "Price per kWh",
            format_currency(inputs.price_per_kwh, ctx.currency_unit)
        ),
        format!(
            "  {:<18}{}%",
            "Shared surplus",
            group_thousands(inputs.sharing_percentage)
        ),
    ]
}

/// Renders the calculator panel: the inputs in effect and both revenue
/// figures with thousands separators and the currency suffix.
pub fn render_calculator(
    estimate: &RevenueEstimate,
    ctx: &ViewContext<'_>,
) -> String {
    let mut lines = vec!["Revenue calculator".to_string(), rule(ctx.theme)];
    lines.extend(input_lines(&estimate.inputs, ctx));
    lines.push(rule(ctx.theme));
    lines.push(format!(
        "  {:<18}{}",
        "Per month",
        format_currency(estimate.monthly_revenue, ctx.currency_unit)
    ));
    lines.push(format!(
        "  {:<18}{}",
        "Per year",
        format_currency(estimate.annual_revenue, ctx.currency_unit)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use solar_core::compute_estimate;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn renders_default_estimate() {
        let estimate = compute_estimate(dec!(8), dec!(200), dec!(40)).unwrap();
        let ctx = ViewContext {
            currency_unit: "GNF",
            theme: ThemeMode::Light,
        };

        let text = render_calculator(&estimate, &ctx);

        let rule = "─".repeat(36);
        let expected = [
            "Revenue calculator",
            rule.as_str(),
            "  Daily surplus     8 kWh/day",
            "  Price per kWh     200 GNF",
            "  Shared surplus    40%",
            rule.as_str(),
            "  Per month         19,200 GNF",
            "  Per year          230,400 GNF",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn dark_theme_uses_double_rule() {
        let estimate = compute_estimate(dec!(10), dec!(150), dec!(100)).unwrap();
        let ctx = ViewContext {
            currency_unit: "GNF",
            theme: ThemeMode::Dark,
        };

        let text = render_calculator(&estimate, &ctx);

        assert!(text.contains(&"═".repeat(36)));
        assert!(text.contains("45,000 GNF"));
        assert!(text.contains("540,000 GNF"));
    }
}
