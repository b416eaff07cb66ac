use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::ForecastError;
use crate::models::DemandSeries;

/// Read demand series from a JSON file (an array of series).
pub fn read_json(path: impl AsRef<Path>) -> Result<Vec<DemandSeries>, ForecastError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let series_list: Vec<DemandSeries> = serde_json::from_reader(reader)?;
    for series in &series_list {
        series.validate()?;
    }
    Ok(series_list)
}

/// Write demand series to a JSON file, optionally pretty-printed.
pub fn write_json(
    series_list: &[DemandSeries],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ForecastError> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, series_list)?;
    } else {
        serde_json::to_writer(writer, series_list)?;
    }
    Ok(())
}
