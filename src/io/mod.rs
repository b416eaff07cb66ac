mod csv_io;
mod json_io;
mod sample;

use std::path::Path;

use crate::error::ForecastError;
use crate::models::DemandSeries;

pub use csv_io::{read_csv, write_csv};
pub use json_io::{read_json, write_json};
pub use sample::{generate_normal_series, generate_uniform_series};

/// Trait for reading demand series from a file.
pub trait SeriesReader {
    fn read(&self, path: &Path) -> Result<Vec<DemandSeries>, ForecastError>;
}

/// Trait for writing demand series to a file.
pub trait SeriesWriter {
    fn write(&self, series: &[DemandSeries], path: &Path) -> Result<(), ForecastError>;
}

/// CSV format reader/writer.
pub struct CsvFormat;

impl SeriesReader for CsvFormat {
    fn read(&self, path: &Path) -> Result<Vec<DemandSeries>, ForecastError> {
        read_csv(path)
    }
}

impl SeriesWriter for CsvFormat {
    fn write(&self, series: &[DemandSeries], path: &Path) -> Result<(), ForecastError> {
        write_csv(series, path)
    }
}

/// JSON format reader/writer.
pub struct JsonFormat {
    pub pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl SeriesReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<Vec<DemandSeries>, ForecastError> {
        read_json(path)
    }
}

impl SeriesWriter for JsonFormat {
    fn write(&self, series: &[DemandSeries], path: &Path) -> Result<(), ForecastError> {
        write_json(series, path, self.pretty)
    }
}
