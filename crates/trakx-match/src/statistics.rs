//! Descriptive statistics over slices of `f64`.
//!
//! Standard deviations use the sample convention (`n - 1` denominator).
//! Degenerate inputs yield `NaN` rather than an error so callers can decide
//! what "no usable data" means for them.

use std::cmp::Ordering;

/// Arithmetic mean, `NaN` for an empty slice.
///
/// Finite inputs always give a finite mean, even when their sum overflows.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = values.iter().sum();
    if sum.is_finite() || !all_finite(values) {
        return sum / values.len() as f64;
    }
    // Running mean; each term is divided before subtracting so nothing overflows.
    values
        .iter()
        .zip(1_u32..)
        .fold(0.0, |mean, (value, count)| {
            let count = f64::from(count);
            mean + (value / count - mean / count)
        })
}

/// Sample standard deviation, `NaN` when fewer than two values are given.
pub fn sample_standard_deviation(values: &[f64]) -> f64 {
    mean_standard_deviation(values).1
}

/// Mean and sample standard deviation in a single call.
pub fn mean_standard_deviation(values: &[f64]) -> (f64, f64) {
    let mean = mean(values);
    if values.len() < 2 {
        return (mean, f64::NAN);
    }
    let degrees_of_freedom = (values.len() - 1) as f64;
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    if squares.is_finite() || !mean.is_finite() || !all_finite(values) {
        return (mean, (squares / degrees_of_freedom).sqrt());
    }

    // Squared deviations overflowed: work on halved deviations scaled by the largest.
    let halved: Vec<f64> = values.iter().map(|v| v / 2.0 - mean / 2.0).collect();
    let scale = halved.iter().fold(0.0_f64, |max, d| max.max(d.abs()));
    let scaled_squares: f64 = halved.iter().map(|d| (d / scale).powi(2)).sum();
    (
        mean,
        2.0 * scale * (scaled_squares / degrees_of_freedom).sqrt(),
    )
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Lower median: the order statistic at index `(n - 1) / 2`.
///
/// For an even number of values this is the smaller of the two central
/// values, not their average. `NaN` for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    nth_order_statistic(values, (values.len() - 1) / 2).unwrap_or(f64::NAN)
}

/// Returns the `n`-th smallest value (0-based, so `n = 0` is the minimum).
///
/// The input is left untouched. Incomparable pairs are treated as equal.
pub fn nth_order_statistic<T>(values: &[T], n: usize) -> Option<T>
where
    T: PartialOrd + Copy,
{
    if n >= values.len() {
        return None;
    }
    let mut scratch = values.to_vec();
    let (_, nth, _) =
        scratch.select_nth_unstable_by(n, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(*nth)
}
