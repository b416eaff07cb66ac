use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::analysis::SeriesStatistics;
use crate::error::ForecastError;
use crate::models::{DemandSeries, InventoryPolicy};

/// Compute safety stock and reorder point from a demand history.
///
/// `safety_stock = service_factor * demand_std_dev * sqrt(lead_time_days)` and
/// `reorder_point = average_daily_demand * lead_time_days + safety_stock`,
/// with mean and standard deviation taken from the historical observations.
/// This assumes demand is stationary over the lead-time window; a trending or
/// seasonal series will under- or over-buffer accordingly.
pub fn compute_policy(
    series: &DemandSeries,
    lead_time_days: u32,
    service_factor: f64,
) -> Result<InventoryPolicy, ForecastError> {
    if lead_time_days == 0 {
        return Err(ForecastError::InvalidParameter(
            "lead_time_days must be positive".to_string(),
        ));
    }
    if !service_factor.is_finite() || service_factor < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "service_factor must be a non-negative number, got {service_factor}"
        )));
    }

    let stats = SeriesStatistics::compute(series)?;

    let safety_stock = service_factor * stats.std_dev * (lead_time_days as f64).sqrt();
    let reorder_point = stats.mean * lead_time_days as f64 + safety_stock;

    debug!(
        product = %series.product,
        lead_time_days,
        service_factor,
        safety_stock,
        reorder_point,
        "computed inventory policy"
    );

    Ok(InventoryPolicy {
        average_daily_demand: stats.mean,
        demand_std_dev: stats.std_dev,
        lead_time_days,
        service_factor,
        safety_stock,
        reorder_point,
    })
}

/// Map a one-sided service level (e.g. 0.95) to its normal z-score
/// (e.g. 1.645), for use as a service factor.
pub fn service_factor_for_level(service_level: f64) -> Result<f64, ForecastError> {
    if !(service_level > 0.0 && service_level < 1.0) {
        return Err(ForecastError::InvalidParameter(format!(
            "service_level must be in (0.0, 1.0), got {service_level}"
        )));
    }
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| ForecastError::AnalysisError(e.to_string()))?;
    Ok(normal.inverse_cdf(service_level).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DemandObservation;
    use assert_approx_eq::assert_approx_eq;
    use chrono::{Duration, NaiveDate};

    fn daily_series(quantities: &[f64]) -> DemandSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let observations = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| DemandObservation::new(start + Duration::days(i as i64), q))
            .collect();
        DemandSeries::from_observations("Product A", observations)
    }

    #[test]
    fn test_constant_demand_worked_scenario() {
        // 50 units/day for 10 days, lead time 7, service factor 0
        let series = daily_series(&[50.0; 10]);
        let policy = compute_policy(&series, 7, 0.0).unwrap();
        assert_approx_eq!(policy.average_daily_demand, 50.0, 1e-9);
        assert_approx_eq!(policy.demand_std_dev, 0.0, 1e-9);
        assert_approx_eq!(policy.safety_stock, 0.0, 1e-9);
        assert_approx_eq!(policy.reorder_point, 350.0, 1e-9);
    }

    #[test]
    fn test_policy_invariants() {
        let series = daily_series(&[45.0, 52.0, 49.0, 61.0, 58.0, 43.0, 40.0]);
        let policy = compute_policy(&series, 7, 1.65).unwrap();
        assert_approx_eq!(
            policy.safety_stock,
            policy.service_factor * policy.demand_std_dev * (policy.lead_time_days as f64).sqrt(),
            1e-9
        );
        assert_approx_eq!(
            policy.reorder_point,
            policy.average_daily_demand * policy.lead_time_days as f64 + policy.safety_stock,
            1e-9
        );
        assert!(policy.safety_stock >= 0.0);
        assert!(
            policy.reorder_point
                >= policy.average_daily_demand * policy.lead_time_days as f64
        );
    }

    #[test]
    fn test_zero_service_factor_zero_safety_stock() {
        let series = daily_series(&[45.0, 52.0, 49.0, 61.0, 58.0]);
        let policy = compute_policy(&series, 14, 0.0).unwrap();
        assert_eq!(policy.safety_stock, 0.0);
        assert_approx_eq!(policy.reorder_point, policy.average_daily_demand * 14.0, 1e-9);
    }

    #[test]
    fn test_service_factor_monotonicity() {
        let series = daily_series(&[45.0, 52.0, 49.0, 61.0, 58.0, 43.0]);
        let low = compute_policy(&series, 7, 1.0).unwrap();
        let high = compute_policy(&series, 7, 2.0).unwrap();
        assert!(high.safety_stock >= low.safety_stock);
        assert!(high.reorder_point >= low.reorder_point);
    }

    #[test]
    fn test_lead_time_monotonicity() {
        let series = daily_series(&[45.0, 52.0, 49.0, 61.0, 58.0, 43.0]);
        let short = compute_policy(&series, 3, 1.65).unwrap();
        let long = compute_policy(&series, 10, 1.65).unwrap();
        assert!(long.reorder_point >= short.reorder_point);
    }

    #[test]
    fn test_deterministic() {
        let series = daily_series(&[45.0, 52.0, 49.0, 61.0, 58.0]);
        let a = compute_policy(&series, 7, 1.65).unwrap();
        let b = compute_policy(&series, 7, 1.65).unwrap();
        assert_eq!(a.safety_stock, b.safety_stock);
        assert_eq!(a.reorder_point, b.reorder_point);
    }

    #[test]
    fn test_single_observation_error() {
        let err = compute_policy(&daily_series(&[50.0]), 7, 1.65).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData(_)));
    }

    #[test]
    fn test_empty_series_error() {
        let err = compute_policy(&DemandSeries::new("Empty"), 7, 1.65).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData(_)));
    }

    #[test]
    fn test_zero_lead_time_error() {
        let err = compute_policy(&daily_series(&[50.0, 60.0]), 0, 1.65).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter(_)));
    }

    #[test]
    fn test_negative_service_factor_error() {
        let err = compute_policy(&daily_series(&[50.0, 60.0]), 7, -0.5).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter(_)));
    }

    #[test]
    fn test_nan_service_factor_error() {
        let err = compute_policy(&daily_series(&[50.0, 60.0]), 7, f64::NAN).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter(_)));
    }

    #[test]
    fn test_unsorted_series_rejected() {
        let mut series = daily_series(&[50.0, 60.0, 70.0]);
        series.observations.swap(0, 2);
        let err = compute_policy(&series, 7, 1.65).unwrap_err();
        assert!(matches!(err, ForecastError::NonMonotonicTimestamps(_)));
    }

    #[test]
    fn test_service_factor_for_95_level() {
        let z = service_factor_for_level(0.95).unwrap();
        assert_approx_eq!(z, 1.6449, 1e-3);
    }

    #[test]
    fn test_service_factor_for_half_level_is_zero() {
        let z = service_factor_for_level(0.5).unwrap();
        assert_approx_eq!(z, 0.0, 1e-9);
    }

    #[test]
    fn test_service_factor_below_half_clamped() {
        // A sub-50% target would imply a negative buffer; clamp to zero
        let z = service_factor_for_level(0.25).unwrap();
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_service_factor_level_out_of_range() {
        assert!(service_factor_for_level(0.0).is_err());
        assert!(service_factor_for_level(1.0).is_err());
        assert!(service_factor_for_level(-0.1).is_err());
        assert!(service_factor_for_level(f64::NAN).is_err());
    }
}
