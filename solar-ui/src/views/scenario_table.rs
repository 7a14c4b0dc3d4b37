use solar_core::format::{format_currency, group_thousands};
use solar_core::{RevenueError, RevenueEstimate};

use crate::csv_loader::Scenario;
use crate::views::ViewContext;

/// Renders one row per scenario. Scenarios whose estimate failed show the
/// error in place of the revenue columns.
pub fn render_scenario_table(
    rows: &[(Scenario, Result<RevenueEstimate, RevenueError>)],
    ctx: &ViewContext<'_>,
) -> String {
    let header = format!(
        "{:<20} {:>10} {:>10} {:>8} {:>16} {:>18}",
        "Scenario", "kWh/day", "Price", "Share %", "Monthly", "Annual"
    );
    let mut lines = vec![header];

    for (scenario, result) in rows {
        let inputs = &scenario.inputs;
        let prefix = format!(
            "{:<20} {:>10} {:>10} {:>8}",
            scenario.label,
            group_thousands(inputs.daily_surplus_kwh),
            group_thousands(inputs.price_per_kwh),
            group_thousands(inputs.sharing_percentage),
        );
        let line = match result {
            Ok(estimate) => format!(
                "{prefix} {:>16} {:>18}",
                format_currency(estimate.monthly_revenue, ctx.currency_unit),
                format_currency(estimate.annual_revenue, ctx.currency_unit),
            ),
            Err(err) => format!("{prefix} error: {err}"),
        };
        lines.push(line);
    }

    lines.join("\n")
}
