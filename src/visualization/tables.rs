use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::SeriesStatistics;
use crate::models::{ForecastSeries, InventoryPolicy};

/// Format the tail of a forecast as a table (most recent `rows` points).
pub fn format_forecast_table(forecast: &ForecastSeries, rows: usize) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!(
            "Forecast: {} ({} day horizon, {:.0}% bounds)",
            forecast.product,
            forecast.horizon_len(),
            forecast.confidence_level * 100.0
        )
        .bold()
        .green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Forecast", "Lower", "Upper"]);

    let skip = forecast.points.len().saturating_sub(rows);
    for point in forecast.points.iter().skip(skip) {
        table.add_row(vec![
            Cell::new(point.date.to_string()),
            Cell::new(format!("{:.2}", point.point_estimate)),
            Cell::new(format!("{:.2}", point.lower_bound)),
            Cell::new(format!("{:.2}", point.upper_bound)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the tail of a forecast as a table.
pub fn print_forecast_table(forecast: &ForecastSeries, rows: usize) {
    print!("{}", format_forecast_table(forecast, rows));
}

/// Format inventory policy metrics as a table.
pub fn format_policy_table(policy: &InventoryPolicy) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Inventory Policy".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value", "Unit"]);

    table.add_row(vec![
        Cell::new("Average Daily Demand"),
        Cell::new(format!("{:.2}", policy.average_daily_demand)),
        Cell::new("units/day"),
    ]);
    table.add_row(vec![
        Cell::new("Demand Std Dev"),
        Cell::new(format!("{:.2}", policy.demand_std_dev)),
        Cell::new("units/day"),
    ]);
    table.add_row(vec![
        Cell::new("Lead Time"),
        Cell::new(format!("{}", policy.lead_time_days)),
        Cell::new("days"),
    ]);
    table.add_row(vec![
        Cell::new("Service Factor"),
        Cell::new(format!("{:.2}", policy.service_factor)),
        Cell::new("z-score"),
    ]);
    table.add_row(vec![
        Cell::new("Safety Stock"),
        Cell::new(format!("{:.2}", policy.safety_stock)),
        Cell::new("units"),
    ]);
    table.add_row(vec![
        Cell::new("Reorder Point"),
        Cell::new(format!("{:.2}", policy.reorder_point)),
        Cell::new("units"),
    ]);

    output.push_str(&format!("{table}\n"));
    output
}

/// Print inventory policy metrics as a table.
pub fn print_policy_table(policy: &InventoryPolicy) {
    print!("{}", format_policy_table(policy));
}

/// Format series summary statistics as a table.
pub fn format_statistics_table(product: &str, stats: &SeriesStatistics) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Demand Summary: {product}").bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Observations"),
        Cell::new(format!("{}", stats.count)),
    ]);
    table.add_row(vec![Cell::new("Mean"), Cell::new(format!("{:.2}", stats.mean))]);
    table.add_row(vec![
        Cell::new("Std Dev"),
        Cell::new(format!("{:.2}", stats.std_dev)),
    ]);
    table.add_row(vec![Cell::new("Min"), Cell::new(format!("{:.2}", stats.min))]);
    table.add_row(vec![Cell::new("Max"), Cell::new(format!("{:.2}", stats.max))]);

    output.push_str(&format!("{table}\n"));
    output
}

/// Print series summary statistics as a table.
pub fn print_statistics_table(product: &str, stats: &SeriesStatistics) {
    print!("{}", format_statistics_table(product, stats));
}
