//! Approximate string matching and statistical preference selection.
//!
//! Two independent building blocks:
//!
//! - [`levenshtein`]: an edit distance where case-only mismatches cost half a
//!   substitution, and a best-match finder built on top of it.
//! - [`selection`]: picks the first item, in order of preference, whose value
//!   lies within a number of standard deviations of the mean or median.
//!
//! Both are pure functions over caller-owned data.

#![deny(unsafe_code)]

pub mod error;
pub mod levenshtein;
pub mod selection;
pub mod statistics;

pub use error::{Result, SelectionError};
pub use levenshtein::{calculate_distance, find_best_match, find_best_match_unbounded};
pub use selection::{
    DEFAULT_MAX_STANDARD_DEVIATIONS, Selection, SelectionOptions, select_least_deviated_from_mean,
    select_least_deviated_from_median, select_with_deviation_threshold,
};
pub use statistics::{
    mean, mean_standard_deviation, median, nth_order_statistic, sample_standard_deviation,
};
