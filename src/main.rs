use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use demand_forecaster::{
    analysis::{
        compute_policy, fit_and_forecast_with, service_factor_for_level, ForecastOptions,
        SeriesStatistics,
    },
    config::EngineConfig,
    io,
    models::DemandSeries,
    visualization::{
        print_demand_chart, print_forecast_table, print_policy_table, print_statistics_table,
    },
};

#[derive(Parser)]
#[command(
    name = "demand-forecast",
    about = "Demand Forecasting & Inventory Optimization - forecast product demand and derive reorder policies",
    version,
    author
)]
struct Cli {
    /// Optional TOML config file with engine defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample sales data file
    Generate {
        /// Output file path (CSV or JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Number of days of history per product
        #[arg(short, long, default_value = "100")]
        days: u32,

        /// Product names to generate
        #[arg(short, long, default_values_t = vec!["Product A".to_string(), "Product B".to_string()])]
        products: Vec<String>,

        /// First date of the series (YYYY-MM-DD)
        #[arg(long, default_value = "2024-01-01")]
        start_date: NaiveDate,

        /// Random seed for reproducible output
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Forecast demand for a product
    Forecast {
        /// Path to input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Product to forecast (defaults to the first in the file)
        #[arg(short, long)]
        product: Option<String>,

        /// Forecast horizon in days
        #[arg(long)]
        horizon: Option<u32>,

        /// Confidence level for the bounds (0.0-1.0)
        #[arg(long)]
        confidence: Option<f64>,

        /// Disable weekly seasonality regressors
        #[arg(long)]
        no_weekly: bool,

        /// Number of forecast rows to display
        #[arg(long, default_value = "10")]
        rows: usize,
    },

    /// Compute safety stock and reorder point for a product
    Policy {
        /// Path to input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Product to analyze (defaults to the first in the file)
        #[arg(short, long)]
        product: Option<String>,

        /// Supplier lead time in days
        #[arg(long)]
        lead_time: Option<u32>,

        /// Safety-stock z-score (e.g. 1.65 for a 95% service level)
        #[arg(long, conflicts_with = "service_level")]
        service_factor: Option<f64>,

        /// One-sided service level to derive the z-score from (0.0-1.0)
        #[arg(long)]
        service_level: Option<f64>,
    },

    /// Forecast plus policy plus chart in one report
    Analyze {
        /// Path to input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Product to analyze (defaults to the first in the file)
        #[arg(short, long)]
        product: Option<String>,

        /// Forecast horizon in days
        #[arg(long)]
        horizon: Option<u32>,

        /// Supplier lead time in days
        #[arg(long)]
        lead_time: Option<u32>,

        /// Safety-stock z-score
        #[arg(long)]
        service_factor: Option<f64>,
    },

    /// Display a quick summary of each product in the file
    Summary {
        /// Path to input file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn load_series(path: &PathBuf) -> Result<Vec<DemandSeries>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => Ok(io::read_csv(path)?),
        "json" => Ok(io::read_json(path)?),
        _ => anyhow::bail!("Unsupported file format: .{ext}. Use .csv or .json"),
    }
}

fn select_product(series_list: Vec<DemandSeries>, product: Option<String>) -> Result<DemandSeries> {
    match product {
        Some(name) => {
            let available: Vec<String> =
                series_list.iter().map(|s| s.product.clone()).collect();
            series_list
                .into_iter()
                .find(|s| s.product == name)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Product '{name}' not found. Available: {}",
                        available.join(", ")
                    )
                })
        }
        None => series_list
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Input file contains no demand data")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let defaults = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Generate {
            output,
            days,
            products,
            start_date,
            seed,
        } => {
            // Offset the seed per product so they get distinct histories
            let series_list: Vec<DemandSeries> = products
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    io::generate_uniform_series(name.clone(), start_date, days, seed + i as u64)
                })
                .collect();

            let ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            match ext.as_str() {
                "csv" => io::write_csv(&series_list, &output)?,
                "json" => io::write_json(&series_list, &output, true)?,
                _ => anyhow::bail!("Unsupported output format: .{ext}. Use .csv or .json"),
            }

            println!(
                "{} Wrote {} days for {} products to {}",
                "Success:".green().bold(),
                days,
                series_list.len(),
                output.display()
            );
        }

        Commands::Forecast {
            input,
            product,
            horizon,
            confidence,
            no_weekly,
            rows,
        } => {
            let series = select_product(load_series(&input)?, product)?;
            println!(
                "\n{}",
                format!("Demand Forecast: {}", series.product).bold().cyan()
            );
            println!("  Loaded {} observations", series.len());

            let options = ForecastOptions {
                confidence_level: confidence.unwrap_or(defaults.confidence_level),
                weekly_seasonality: !no_weekly,
            };
            let forecast = fit_and_forecast_with(
                &series,
                horizon.unwrap_or(defaults.horizon_days),
                &options,
            )?;
            print_forecast_table(&forecast, rows);
        }

        Commands::Policy {
            input,
            product,
            lead_time,
            service_factor,
            service_level,
        } => {
            let series = select_product(load_series(&input)?, product)?;
            println!(
                "\n{}",
                format!("Inventory Policy: {}", series.product).bold().cyan()
            );

            let factor = match service_level {
                Some(level) => service_factor_for_level(level)?,
                None => service_factor.unwrap_or(defaults.service_factor),
            };
            let policy = compute_policy(
                &series,
                lead_time.unwrap_or(defaults.lead_time_days),
                factor,
            )?;
            print_policy_table(&policy);
        }

        Commands::Analyze {
            input,
            product,
            horizon,
            lead_time,
            service_factor,
        } => {
            let series = select_product(load_series(&input)?, product)?;
            println!(
                "\n{}",
                format!("Demand Analysis: {}", series.product).bold().cyan()
            );
            println!("  Loaded {} observations", series.len());

            match SeriesStatistics::compute(&series) {
                Ok(stats) => print_statistics_table(&series.product, &stats),
                Err(e) => eprintln!("{}: {e}", "Warning".yellow()),
            }

            let options = ForecastOptions {
                confidence_level: defaults.confidence_level,
                weekly_seasonality: true,
            };
            let forecast = fit_and_forecast_with(
                &series,
                horizon.unwrap_or(defaults.horizon_days),
                &options,
            )?;
            print_forecast_table(&forecast, 10);

            let policy = compute_policy(
                &series,
                lead_time.unwrap_or(defaults.lead_time_days),
                service_factor.unwrap_or(defaults.service_factor),
            )?;
            print_policy_table(&policy);

            print_demand_chart(&series, &forecast, 14);
            println!(
                "  Reorder when inventory falls to {} units",
                format!("{:.0}", policy.reorder_point).bold()
            );
        }

        Commands::Summary { input } => {
            let series_list = load_series(&input)?;

            println!("\n{}", "Quick Summary".bold().cyan());
            println!("{}", "=".repeat(40));
            for series in &series_list {
                println!("  Product:        {}", series.product);
                println!("  Observations:   {}", series.len());
                if let (Some(first), Some(last)) = (series.first_date(), series.last_date()) {
                    println!("  Date Range:     {first} to {last}");
                }
                println!("  Mean Demand:    {:.1}", series.mean_quantity());
                println!("  Std Dev:        {:.1}", series.std_dev_quantity());
                println!();
            }
        }
    }

    Ok(())
}
