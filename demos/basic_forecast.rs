//! Basic forecasting example: generate sample data, fit a forecast, and
//! display the results.
//!
//! Run from the project root:
//!   cargo run --example basic_forecast

use chrono::NaiveDate;

use demand_forecaster::analysis::Engine;
use demand_forecaster::io::generate_uniform_series;
use demand_forecaster::visualization::{print_forecast_table, print_statistics_table};

fn main() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let series = generate_uniform_series("Product A", start, 100, 42);
    println!(
        "Generated '{}': {} observations from {} to {}",
        series.product,
        series.len(),
        series.first_date().unwrap(),
        series.last_date().unwrap()
    );

    let engine = Engine::new(&series);

    let stats = engine.statistics().expect("summary statistics");
    print_statistics_table(&series.product, &stats);

    let forecast = engine.forecast(30).expect("forecast");
    print_forecast_table(&forecast, 10);
}
