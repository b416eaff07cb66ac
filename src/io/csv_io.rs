use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::ForecastError;
use crate::models::{DemandObservation, DemandSeries};

/// CSV row structure for sales data (`date,product,quantity`).
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct SalesRow {
    date: NaiveDate,
    product: String,
    quantity: f64,
}

/// Read sales data from a CSV file. One file may hold several products; the
/// result is one date-sorted, validated series per product.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<DemandSeries>, ForecastError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut by_product: BTreeMap<String, Vec<DemandObservation>> = BTreeMap::new();
    for result in rdr.deserialize() {
        let row: SalesRow = result?;
        by_product
            .entry(row.product)
            .or_default()
            .push(DemandObservation::new(row.date, row.quantity));
    }

    let mut series_list = Vec::with_capacity(by_product.len());
    for (product, mut observations) in by_product {
        observations.sort_by_key(|o| o.date);
        let series = DemandSeries::from_observations(product, observations);
        series.validate()?;
        series_list.push(series);
    }
    Ok(series_list)
}

/// Write sales data to a CSV file, one row per observation.
pub fn write_csv(series_list: &[DemandSeries], path: impl AsRef<Path>) -> Result<(), ForecastError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for series in series_list {
        for obs in &series.observations {
            wtr.serialize(SalesRow {
                date: obs.date,
                product: series.product.clone(),
                quantity: obs.quantity,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
