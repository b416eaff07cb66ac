use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::error::ForecastError;
use crate::models::{DemandSeries, ForecastPoint, ForecastSeries};

/// Minimum observations before day-of-week regressors are identifiable.
const MIN_SEASONAL_OBSERVATIONS: usize = 14;

/// Minimum observations before a linear trend is fitted.
const MIN_TREND_OBSERVATIONS: usize = 3;

/// Options controlling the forecast fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOptions {
    /// Confidence level for the uncertainty bounds (0.0..1.0, default 0.80)
    pub confidence_level: f64,
    /// Fit day-of-week regressors when the series is long enough
    pub weekly_seasonality: bool,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.80,
            weekly_seasonality: true,
        }
    }
}

/// Fit an additive trend + weekly seasonality model to the series and forecast
/// `horizon_days` points beyond the last observation, using default options.
///
/// The returned series covers every observed date (in-sample fit) followed by
/// the future horizon; for daily contiguous input its length is
/// `series.len() + horizon_days`.
pub fn fit_and_forecast(
    series: &DemandSeries,
    horizon_days: u32,
) -> Result<ForecastSeries, ForecastError> {
    fit_and_forecast_with(series, horizon_days, &ForecastOptions::default())
}

/// `fit_and_forecast` with explicit options.
///
/// The fit is ordinary least squares over a linear trend in days since the
/// first observation, plus Monday-baseline day-of-week dummies when weekly
/// seasonality is enabled and the series has enough observations. Uncertainty
/// bounds are a symmetric interval `point +/- z * residual_std_dev` with `z`
/// taken from the normal quantile at the configured confidence level. The
/// computation is fully deterministic.
///
/// Short series degrade instead of failing: below 14 observations the weekly
/// regressors are dropped, below 3 the trend is dropped and the fit is the
/// series mean. Only an empty series is an error.
pub fn fit_and_forecast_with(
    series: &DemandSeries,
    horizon_days: u32,
    options: &ForecastOptions,
) -> Result<ForecastSeries, ForecastError> {
    if horizon_days == 0 {
        return Err(ForecastError::InvalidParameter(
            "horizon_days must be positive".to_string(),
        ));
    }
    if !(options.confidence_level > 0.0 && options.confidence_level < 1.0) {
        return Err(ForecastError::InvalidParameter(format!(
            "confidence_level must be in (0.0, 1.0), got {}",
            options.confidence_level
        )));
    }
    series.validate()?;
    if series.is_empty() {
        return Err(ForecastError::InsufficientData(format!(
            "{}: cannot fit a forecast to an empty series",
            series.product
        )));
    }

    let n = series.len();
    let origin = series.observations[0].date;
    let y: Vec<f64> = series.quantities();

    let use_trend = n >= MIN_TREND_OBSERVATIONS;
    let use_seasonality = options.weekly_seasonality && n >= MIN_SEASONAL_OBSERVATIONS;

    let rows: Vec<Vec<f64>> = series
        .observations
        .iter()
        .map(|o| design_row(o.date, origin, use_trend, use_seasonality))
        .collect();

    // A seasonal fit can be singular for irregular calendars (e.g. a weekday
    // never observed); retry without the seasonal regressors before giving up.
    let (coefficients, seasonal_fitted) = match solve_least_squares(&rows, &y) {
        Ok(beta) => (beta, use_seasonality),
        Err(_) if use_seasonality => {
            let trend_rows: Vec<Vec<f64>> = series
                .observations
                .iter()
                .map(|o| design_row(o.date, origin, use_trend, false))
                .collect();
            (solve_least_squares(&trend_rows, &y)?, false)
        }
        Err(e) => return Err(e),
    };

    let p = coefficients.len();
    let residual_sq_sum: f64 = series
        .observations
        .iter()
        .zip(&y)
        .map(|(o, &observed)| {
            let row = design_row(o.date, origin, use_trend, seasonal_fitted);
            (observed - predict(&row, &coefficients)).powi(2)
        })
        .sum();
    let residual_std_dev = (residual_sq_sum / (n.saturating_sub(p)).max(1) as f64).sqrt();

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| ForecastError::AnalysisError(e.to_string()))?;
    let z = normal.inverse_cdf(0.5 + options.confidence_level / 2.0);
    let margin = z * residual_std_dev;

    debug!(
        product = %series.product,
        observations = n,
        parameters = p,
        trend = use_trend,
        seasonality = seasonal_fitted,
        residual_std_dev,
        "fitted demand model"
    );

    let cadence = cadence_days(series);
    let last_date = series.observations[n - 1].date;
    let future_dates =
        (1..=horizon_days as i64).map(|k| last_date + Duration::days(k * cadence));
    let all_dates = series
        .observations
        .iter()
        .map(|o| o.date)
        .chain(future_dates);

    let points = all_dates
        .map(|date| {
            let row = design_row(date, origin, use_trend, seasonal_fitted);
            let estimate = predict(&row, &coefficients);
            ForecastPoint {
                date,
                point_estimate: estimate,
                lower_bound: estimate - margin,
                upper_bound: estimate + margin,
            }
        })
        .collect();

    Ok(ForecastSeries {
        product: series.product.clone(),
        points,
        history_len: n,
        confidence_level: options.confidence_level,
    })
}

/// Build one design-matrix row: intercept, optional trend (days since the
/// first observation), optional Tuesday..Sunday dummies (Monday baseline).
fn design_row(date: NaiveDate, origin: NaiveDate, trend: bool, seasonality: bool) -> Vec<f64> {
    let mut row = vec![1.0];
    if trend {
        row.push((date - origin).num_days() as f64);
    }
    if seasonality {
        let weekday = date.weekday().num_days_from_monday() as usize;
        for d in 1..7 {
            row.push(if weekday == d { 1.0 } else { 0.0 });
        }
    }
    row
}

fn predict(row: &[f64], coefficients: &[f64]) -> f64 {
    row.iter().zip(coefficients).map(|(x, b)| x * b).sum()
}

/// Solve the normal equations `X'X b = X'y` by Gaussian elimination with
/// partial pivoting. The system is at most 8x8.
fn solve_least_squares(rows: &[Vec<f64>], y: &[f64]) -> Result<Vec<f64>, ForecastError> {
    let p = rows.first().map_or(0, Vec::len);
    if p == 0 {
        return Err(ForecastError::InsufficientData(
            "empty design matrix".to_string(),
        ));
    }

    let mut xtx = vec![vec![0.0; p]; p];
    let mut xty = vec![0.0; p];
    for (row, &observed) in rows.iter().zip(y) {
        for i in 0..p {
            for j in 0..p {
                xtx[i][j] += row[i] * row[j];
            }
            xty[i] += row[i] * observed;
        }
    }

    for col in 0..p {
        let pivot_row = (col..p)
            .max_by(|&a, &b| {
                xtx[a][col]
                    .abs()
                    .partial_cmp(&xtx[b][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        if xtx[pivot_row][col].abs() < 1e-10 {
            return Err(ForecastError::AnalysisError(
                "design matrix is singular".to_string(),
            ));
        }
        xtx.swap(col, pivot_row);
        xty.swap(col, pivot_row);

        for row in (col + 1)..p {
            let factor = xtx[row][col] / xtx[col][col];
            for k in col..p {
                xtx[row][k] -= factor * xtx[col][k];
            }
            xty[row] -= factor * xty[col];
        }
    }

    let mut beta = vec![0.0; p];
    for row in (0..p).rev() {
        let tail: f64 = ((row + 1)..p).map(|k| xtx[row][k] * beta[k]).sum();
        beta[row] = (xty[row] - tail) / xtx[row][row];
    }
    Ok(beta)
}

/// Modal gap in days between consecutive observations; 1 for daily data and
/// for series too short to measure.
fn cadence_days(series: &DemandSeries) -> i64 {
    let mut gap_counts: std::collections::HashMap<i64, usize> = std::collections::HashMap::new();
    for pair in series.observations.windows(2) {
        let gap = (pair[1].date - pair[0].date).num_days();
        *gap_counts.entry(gap).or_insert(0) += 1;
    }
    gap_counts
        .into_iter()
        .max_by_key(|&(gap, count)| (count, std::cmp::Reverse(gap)))
        .map(|(gap, _)| gap.max(1))
        .unwrap_or(1)
}
