use colored::Colorize;

use crate::models::{DemandSeries, ForecastSeries};

const BAR_WIDTH: usize = 40;

/// Format a text chart of observed demand followed by the projected forecast.
/// Observed rows render green bars from the actual quantities; projected rows
/// render red bars from the point estimates. Shows the last `history_rows`
/// observations to keep long histories readable.
pub fn format_demand_chart(
    series: &DemandSeries,
    forecast: &ForecastSeries,
    history_rows: usize,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Demand & Forecast: {}", series.product).bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let projected = forecast.projected();
    if series.is_empty() && projected.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let max_value = series
        .observations
        .iter()
        .map(|o| o.quantity)
        .chain(projected.iter().map(|p| p.point_estimate))
        .fold(0.0f64, f64::max);

    let bar_len = |value: f64| -> usize {
        if max_value > 0.0 {
            ((value / max_value) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        }
    };

    let skip = series.observations.len().saturating_sub(history_rows);
    for obs in series.observations.iter().skip(skip) {
        let bar = "\u{2588}".repeat(bar_len(obs.quantity));
        output.push_str(&format!(
            "  {}  {:>8.1}  {}\n",
            obs.date,
            obs.quantity,
            bar.green()
        ));
    }

    for point in projected {
        let bar = "\u{2588}".repeat(bar_len(point.point_estimate));
        output.push_str(&format!(
            "  {}  {:>8.1}  {}\n",
            point.date,
            point.point_estimate,
            bar.red()
        ));
    }

    output.push('\n');
    output
}

/// Print a text chart of observed demand followed by the projected forecast.
pub fn print_demand_chart(series: &DemandSeries, forecast: &ForecastSeries, history_rows: usize) {
    print!("{}", format_demand_chart(series, forecast, history_rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DemandObservation, ForecastPoint};
    use chrono::{Duration, NaiveDate};

    fn sample() -> (DemandSeries, ForecastSeries) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let observations: Vec<DemandObservation> = (0..10)
            .map(|i| DemandObservation::new(start + Duration::days(i), 40.0 + i as f64))
            .collect();
        let series = DemandSeries::from_observations("Chart Test", observations);

        let points = (0..13)
            .map(|i| ForecastPoint {
                date: start + Duration::days(i),
                point_estimate: 45.0,
                lower_bound: 40.0,
                upper_bound: 50.0,
            })
            .collect();
        let forecast = ForecastSeries {
            product: "Chart Test".to_string(),
            points,
            history_len: 10,
            confidence_level: 0.80,
        };
        (series, forecast)
    }

    #[test]
    fn test_chart_contains_product_and_rows() {
        let (series, forecast) = sample();
        let output = format_demand_chart(&series, &forecast, 10);
        assert!(output.contains("Chart Test"));
        assert!(output.contains("2024-01-01"));
        // Projected dates appear after the history
        assert!(output.contains("2024-01-13"));
    }

    #[test]
    fn test_chart_limits_history_rows() {
        let (series, forecast) = sample();
        let output = format_demand_chart(&series, &forecast, 3);
        assert!(!output.contains("2024-01-01"));
        assert!(output.contains("2024-01-10"));
    }

    #[test]
    fn test_chart_empty() {
        let series = DemandSeries::new("Empty");
        let forecast = ForecastSeries {
            product: "Empty".to_string(),
            points: vec![],
            history_len: 0,
            confidence_level: 0.80,
        };
        let output = format_demand_chart(&series, &forecast, 10);
        assert!(output.contains("No data available."));
    }
}
