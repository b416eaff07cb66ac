use crate::analysis::{
    compute_policy, fit_and_forecast, fit_and_forecast_with, ForecastOptions, SeriesStatistics,
};
use crate::error::ForecastError;
use crate::models::{DemandSeries, ForecastSeries, InventoryPolicy};

/// Unified API grouping the forecasting and policy operations on one series.
pub struct Engine<'a> {
    series: &'a DemandSeries,
}

impl<'a> Engine<'a> {
    /// Create a new Engine borrowing the given series.
    pub fn new(series: &'a DemandSeries) -> Self {
        Self { series }
    }

    /// Fit and forecast `horizon_days` beyond the last observation with
    /// default options.
    pub fn forecast(&self, horizon_days: u32) -> Result<ForecastSeries, ForecastError> {
        fit_and_forecast(self.series, horizon_days)
    }

    /// Fit and forecast with explicit options.
    pub fn forecast_with(
        &self,
        horizon_days: u32,
        options: &ForecastOptions,
    ) -> Result<ForecastSeries, ForecastError> {
        fit_and_forecast_with(self.series, horizon_days, options)
    }

    /// Compute safety stock and reorder point for the given lead time and
    /// service factor.
    pub fn policy(
        &self,
        lead_time_days: u32,
        service_factor: f64,
    ) -> Result<InventoryPolicy, ForecastError> {
        compute_policy(self.series, lead_time_days, service_factor)
    }

    /// Summary statistics of the observed demand.
    pub fn statistics(&self) -> Result<SeriesStatistics, ForecastError> {
        SeriesStatistics::compute(self.series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DemandObservation;
    use chrono::{Duration, NaiveDate};

    fn sample_series() -> DemandSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let quantities = [45.0, 52.0, 49.0, 61.0, 58.0, 43.0, 40.0, 47.0, 55.0, 50.0];
        let observations = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| DemandObservation::new(start + Duration::days(i as i64), q))
            .collect();
        DemandSeries::from_observations("Engine Test", observations)
    }

    #[test]
    fn test_forecast_matches_standalone() {
        let series = sample_series();
        let engine = Engine::new(&series);
        let from_engine = engine.forecast(10).unwrap();
        let from_standalone = fit_and_forecast(&series, 10).unwrap();
        assert_eq!(from_engine.len(), from_standalone.len());
        assert_eq!(
            from_engine.points[5].point_estimate,
            from_standalone.points[5].point_estimate
        );
    }

    #[test]
    fn test_policy_matches_standalone() {
        let series = sample_series();
        let engine = Engine::new(&series);
        let from_engine = engine.policy(7, 1.65).unwrap();
        let from_standalone = compute_policy(&series, 7, 1.65).unwrap();
        assert_eq!(from_engine.reorder_point, from_standalone.reorder_point);
        assert_eq!(from_engine.safety_stock, from_standalone.safety_stock);
    }

    #[test]
    fn test_statistics_matches_standalone() {
        let series = sample_series();
        let engine = Engine::new(&series);
        let from_engine = engine.statistics().unwrap();
        let from_standalone = SeriesStatistics::compute(&series).unwrap();
        assert_eq!(from_engine.mean, from_standalone.mean);
        assert_eq!(from_engine.std_dev, from_standalone.std_dev);
    }

    #[test]
    fn test_engine_empty_series() {
        let series = DemandSeries::new("Empty");
        let engine = Engine::new(&series);
        assert!(engine.forecast(30).is_err());
        assert!(engine.policy(7, 1.65).is_err());
        assert!(engine.statistics().is_err());
    }
}
