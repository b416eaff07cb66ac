//! Inventory policy example: derive safety stock and reorder point from a
//! generated demand history at several service levels.
//!
//! Run from the project root:
//!   cargo run --example policy_report

use chrono::NaiveDate;

use demand_forecaster::analysis::{compute_policy, service_factor_for_level};
use demand_forecaster::io::generate_normal_series;
use demand_forecaster::visualization::print_policy_table;

fn main() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let series = generate_normal_series("Product A", start, 90, 50.0, 8.0, 7);
    println!(
        "Generated '{}': {} observations, mean {:.1}, std dev {:.1}",
        series.product,
        series.len(),
        series.mean_quantity(),
        series.std_dev_quantity()
    );

    for level in [0.90, 0.95, 0.99] {
        let factor = service_factor_for_level(level).expect("valid service level");
        println!("\nService level {:.0}% (z = {:.2}):", level * 100.0, factor);
        let policy = compute_policy(&series, 7, factor).expect("policy");
        print_policy_table(&policy);
    }
}
