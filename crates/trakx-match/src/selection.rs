//! Preference selection with a standard-deviation threshold.
//!
//! Given candidates ordered by preference (for instance quotes from several
//! market data providers, most trusted first), pick the first one whose value
//! is not too far from the central tendency of all of them. This guards
//! against a single provider returning an erroneous value.

use serde::Serialize;

use crate::error::{Result, SelectionError};
use crate::statistics;

/// Default multiplier applied to the standard deviation.
pub const DEFAULT_MAX_STANDARD_DEVIATIONS: f64 = 0.2;

/// Tuning for [`select_with_deviation_threshold`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOptions {
    /// Candidates deviating by `max_standard_deviations * sd` or more are rejected.
    pub max_standard_deviations: f64,
    /// Measure deviation from the median instead of the mean.
    pub use_median: bool,
    /// Fail instead of falling back to the least deviated candidate.
    pub throw_if_no_match: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            max_standard_deviations: DEFAULT_MAX_STANDARD_DEVIATIONS,
            use_median: false,
            throw_if_no_match: false,
        }
    }
}

impl SelectionOptions {
    #[must_use]
    pub fn with_max_standard_deviations(mut self, max_standard_deviations: f64) -> Self {
        self.max_standard_deviations = max_standard_deviations;
        self
    }

    #[must_use]
    pub fn with_median(mut self, use_median: bool) -> Self {
        self.use_median = use_median;
        self
    }

    #[must_use]
    pub fn with_throw_if_no_match(mut self, throw_if_no_match: bool) -> Self {
        self.throw_if_no_match = throw_if_no_match;
        self
    }
}

/// The selected item together with the statistics used to select it.
///
/// Statistics are `NaN` when there was no usable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection<T> {
    pub selection: Option<T>,
    pub mean: f64,
    pub standard_deviation: f64,
    pub median: f64,
}

impl<T> Selection<T> {
    fn empty() -> Self {
        Self {
            selection: None,
            mean: f64::NAN,
            standard_deviation: f64::NAN,
            median: f64::NAN,
        }
    }

    /// Returns true when no item could be selected.
    pub fn is_empty(&self) -> bool {
        self.selection.is_none()
    }

    /// The center deviations were measured against.
    pub fn center(&self, use_median: bool) -> f64 {
        if use_median { self.median } else { self.mean }
    }
}

enum Outcome<T> {
    /// An item met the threshold, or there was nothing to compare.
    Settled(Selection<T>),
    /// Nothing met the threshold; carries the least deviated item.
    Fallback(Selection<T>),
}

/// Selects the first preference whose value lies strictly within
/// `max_standard_deviations` standard deviations of the mean (or median).
///
/// Items for which `value_selector` returns `None` or `NaN` are ignored. A
/// single usable item is returned as is. When no item meets the threshold,
/// the least deviated one is returned (earliest on ties), unless
/// `throw_if_no_match` is set.
///
/// # Errors
///
/// [`SelectionError::NoMatchWithinDeviationThreshold`] when
/// `throw_if_no_match` is set and no item meets the threshold.
pub fn select_with_deviation_threshold<T, F>(
    preferences: &[T],
    value_selector: F,
    options: SelectionOptions,
) -> Result<Selection<T>>
where
    T: Clone,
    F: Fn(&T) -> Option<f64>,
{
    match evaluate(preferences, value_selector, options) {
        Outcome::Settled(selection) => Ok(selection),
        Outcome::Fallback(selection) if options.throw_if_no_match => {
            Err(SelectionError::NoMatchWithinDeviationThreshold {
                mean: selection.mean,
                standard_deviation: selection.standard_deviation,
                median: selection.median,
                max_standard_deviations: options.max_standard_deviations,
            })
        }
        Outcome::Fallback(selection) => Ok(selection),
    }
}

/// Selects the preference whose value is closest to the mean.
pub fn select_least_deviated_from_mean<T, F>(preferences: &[T], value_selector: F) -> Selection<T>
where
    T: Clone,
    F: Fn(&T) -> Option<f64>,
{
    least_deviated(preferences, value_selector, false)
}

/// Selects the preference whose value is closest to the (lower) median.
pub fn select_least_deviated_from_median<T, F>(preferences: &[T], value_selector: F) -> Selection<T>
where
    T: Clone,
    F: Fn(&T) -> Option<f64>,
{
    least_deviated(preferences, value_selector, true)
}

fn least_deviated<T, F>(preferences: &[T], value_selector: F, use_median: bool) -> Selection<T>
where
    T: Clone,
    F: Fn(&T) -> Option<f64>,
{
    // A zero threshold never accepts early, so the walk always falls back.
    let options = SelectionOptions {
        max_standard_deviations: 0.0,
        use_median,
        throw_if_no_match: false,
    };
    match evaluate(preferences, value_selector, options) {
        Outcome::Settled(selection) | Outcome::Fallback(selection) => selection,
    }
}

fn evaluate<T, F>(preferences: &[T], value_selector: F, options: SelectionOptions) -> Outcome<T>
where
    T: Clone,
    F: Fn(&T) -> Option<f64>,
{
    let candidates: Vec<(&T, f64)> = preferences
        .iter()
        .filter_map(|item| {
            value_selector(item)
                .filter(|value| !value.is_nan())
                .map(|value| (item, value))
        })
        .collect();

    match candidates.as_slice() {
        [] => return Outcome::Settled(Selection::empty()),
        [(item, value)] => {
            return Outcome::Settled(Selection {
                selection: Some((*item).clone()),
                mean: *value,
                standard_deviation: 0.0,
                median: *value,
            });
        }
        _ => {}
    }

    let values: Vec<f64> = candidates.iter().map(|(_, value)| *value).collect();
    let (mean, standard_deviation) = statistics::mean_standard_deviation(&values);
    let median = statistics::median(&values);
    let statistics_only = Selection {
        selection: None,
        mean,
        standard_deviation,
        median,
    };

    if mean.is_nan() || standard_deviation.is_nan() || median.is_nan() {
        tracing::warn!(
            candidates = values.len(),
            "statistics are undefined for the given values, nothing selected"
        );
        return Outcome::Settled(statistics_only);
    }

    let center = statistics_only.center(options.use_median);
    let threshold = options.max_standard_deviations * standard_deviation;

    let mut least_deviated: Option<(&T, f64)> = None;
    for (index, (item, value)) in candidates.iter().enumerate() {
        let deviation = (value - center).abs();
        if deviation < threshold {
            tracing::debug!(index, value = *value, deviation, threshold, "preference accepted");
            return Outcome::Settled(Selection {
                selection: Some((*item).clone()),
                ..statistics_only
            });
        }
        if least_deviated.is_none_or(|(_, minimum)| deviation < minimum) {
            least_deviated = Some((*item, deviation));
        }
    }

    tracing::debug!(
        mean,
        median,
        standard_deviation,
        max_standard_deviations = options.max_standard_deviations,
        "no preference within threshold, falling back to least deviated"
    );
    Outcome::Fallback(Selection {
        selection: least_deviated.map(|(item, _)| item.clone()),
        ..statistics_only
    })
}
