mod tables;
mod charts;

pub use tables::{
    format_forecast_table, print_forecast_table,
    format_policy_table, print_policy_table,
    format_statistics_table, print_statistics_table,
};
pub use charts::{format_demand_chart, print_demand_chart};
