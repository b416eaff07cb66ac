use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// One forecasted value with its uncertainty bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Date the estimate applies to
    pub date: NaiveDate,
    /// Expected units demanded
    pub point_estimate: f64,
    /// Lower uncertainty bound
    pub lower_bound: f64,
    /// Upper uncertainty bound
    pub upper_bound: f64,
}

impl ForecastPoint {
    /// Check the bound ordering `lower <= point <= upper`.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.lower_bound > self.point_estimate || self.point_estimate > self.upper_bound {
            return Err(ForecastError::AnalysisError(format!(
                "forecast bounds out of order at {}: {} <= {} <= {} does not hold",
                self.date, self.lower_bound, self.point_estimate, self.upper_bound
            )));
        }
        Ok(())
    }
}

/// A fitted forecast: in-sample estimates for the historical range followed by
/// projected estimates for the future horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Product the forecast was fitted for
    pub product: String,
    /// All forecast points, in date order
    pub points: Vec<ForecastPoint>,
    /// Number of leading points that correspond to observed dates
    pub history_len: usize,
    /// Confidence level the bounds were computed at (e.g. 0.80)
    pub confidence_level: f64,
}

impl ForecastSeries {
    /// Total number of forecast points (historical fit + future horizon).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// In-sample points covering the observed dates.
    pub fn fitted(&self) -> &[ForecastPoint] {
        &self.points[..self.history_len.min(self.points.len())]
    }

    /// Points projected beyond the last observed date.
    pub fn projected(&self) -> &[ForecastPoint] {
        &self.points[self.history_len.min(self.points.len())..]
    }

    /// Number of projected future points.
    pub fn horizon_len(&self) -> usize {
        self.points.len().saturating_sub(self.history_len)
    }
}
