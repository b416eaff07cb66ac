mod statistics;
mod forecaster;
mod policy;
mod engine;

pub use statistics::SeriesStatistics;
pub use forecaster::{fit_and_forecast, fit_and_forecast_with, ForecastOptions};
pub use policy::{compute_policy, service_factor_for_level};
pub use engine::Engine;
