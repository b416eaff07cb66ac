use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// A single observed demand quantity on a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandObservation {
    /// Date the demand was observed
    pub date: NaiveDate,
    /// Units demanded (non-negative)
    pub quantity: f64,
}

impl DemandObservation {
    pub fn new(date: NaiveDate, quantity: f64) -> Self {
        Self { date, quantity }
    }
}

/// A time-ordered demand history for one product.
///
/// Dates must be strictly increasing (no duplicates). Irregular sampling is
/// allowed; the reference workflow uses daily cadence. The series is read-only
/// for the engine: forecast and policy computations never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandSeries {
    /// Product name or identifier
    pub product: String,
    /// Observations ordered by date
    pub observations: Vec<DemandObservation>,
}

impl DemandSeries {
    /// Create a new empty series for a product.
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            observations: Vec::new(),
        }
    }

    /// Create a series from existing observations.
    pub fn from_observations(
        product: impl Into<String>,
        observations: Vec<DemandObservation>,
    ) -> Self {
        Self {
            product: product.into(),
            observations,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Date of the first observation, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    /// Date of the last observation, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Observed quantities in date order.
    pub fn quantities(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.quantity).collect()
    }

    /// Arithmetic mean of observed quantities.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use demand_forecaster::models::{DemandObservation, DemandSeries};
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let mut series = DemandSeries::new("Product A");
    /// series.observations.push(DemandObservation::new(start, 40.0));
    /// series
    ///     .observations
    ///     .push(DemandObservation::new(start.succ_opt().unwrap(), 60.0));
    /// assert!((series.mean_quantity() - 50.0).abs() < 0.001);
    /// ```
    pub fn mean_quantity(&self) -> f64 {
        if self.observations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.observations.iter().map(|o| o.quantity).sum();
        sum / self.observations.len() as f64
    }

    /// Sample standard deviation of observed quantities (divisor n-1).
    /// Returns 0.0 for fewer than two observations.
    pub fn std_dev_quantity(&self) -> f64 {
        let n = self.observations.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean_quantity();
        let variance = self
            .observations
            .iter()
            .map(|o| (o.quantity - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    }

    /// Validate the series: strictly increasing dates, non-negative quantities.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for obs in &self.observations {
            if !obs.quantity.is_finite() || obs.quantity < 0.0 {
                return Err(ForecastError::ValidationError(format!(
                    "{}: quantity at {} must be a non-negative number, got {}",
                    self.product, obs.date, obs.quantity
                )));
            }
        }
        for pair in self.observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ForecastError::NonMonotonicTimestamps(format!(
                    "{}: {} does not follow {}",
                    self.product, pair[1].date, pair[0].date
                )));
            }
        }
        Ok(())
    }
}
