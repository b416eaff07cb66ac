use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::models::{DemandObservation, DemandSeries};

/// Generate a daily demand series with integer quantities drawn uniformly
/// from [20, 100), matching the reference sample-data workflow. The seed is
/// an explicit parameter so runs are reproducible.
pub fn generate_uniform_series(
    product: impl Into<String>,
    start: NaiveDate,
    days: u32,
    seed: u64,
) -> DemandSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let observations = (0..days as i64)
        .map(|i| {
            let quantity = rng.gen_range(20..100) as f64;
            DemandObservation::new(start + Duration::days(i), quantity)
        })
        .collect();
    DemandSeries::from_observations(product, observations)
}

/// Generate a daily demand series from a normal distribution with the given
/// mean and standard deviation. Samples are rounded to whole units and
/// negative draws are clamped to zero.
pub fn generate_normal_series(
    product: impl Into<String>,
    start: NaiveDate,
    days: u32,
    mean: f64,
    std_dev: f64,
    seed: u64,
) -> DemandSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    // std dev is clamped non-negative, so construction cannot fail
    let normal = Normal::new(mean, std_dev.max(0.0)).expect("non-negative std dev");
    let observations = (0..days as i64)
        .map(|i| {
            let quantity = normal.sample(&mut rng).round().max(0.0);
            DemandObservation::new(start + Duration::days(i), quantity)
        })
        .collect();
    DemandSeries::from_observations(product, observations)
}
