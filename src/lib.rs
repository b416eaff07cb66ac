pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::Engine;
pub use config::EngineConfig;
pub use error::ForecastError;
pub use io::{SeriesReader, SeriesWriter};
pub use models::{DemandObservation, DemandSeries, ForecastPoint, ForecastSeries, InventoryPolicy};
