use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::models::DemandSeries;

/// Summary statistics for a demand series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SeriesStatistics {
    /// Compute summary statistics from a series. Requires at least two
    /// observations so the sample standard deviation is defined.
    pub fn compute(series: &DemandSeries) -> Result<Self, ForecastError> {
        series.validate()?;
        let n = series.len();
        if n < 2 {
            return Err(ForecastError::InsufficientData(format!(
                "{}: need at least 2 observations for summary statistics, got {n}",
                series.product
            )));
        }

        let values = series.quantities();
        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Ok(SeriesStatistics {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            count: n,
        })
    }
}
