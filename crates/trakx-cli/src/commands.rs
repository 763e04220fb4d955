use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use trakx_match::{
    Selection, SelectionOptions, calculate_distance, find_best_match,
    select_with_deviation_threshold,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    pub source: String,
    pub target: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatchReport {
    pub source: String,
    pub max_distance: f64,
    pub best_match: Option<String>,
    pub distance: Option<f64>,
}

/// Outcome of `trakx select`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectReport {
    /// Usable values, in preference order.
    pub values: Vec<f64>,
    /// Inputs that are not numbers, or are `NaN`.
    pub ignored: Vec<String>,
    pub max_standard_deviations: f64,
    pub use_median: bool,
    pub selection: Selection<f64>,
}

pub fn run_distance(source: &str, target: &str) -> DistanceReport {
    let distance = calculate_distance(source, target);
    info!(source, target, distance, "computed distance");
    DistanceReport {
        source: source.to_string(),
        target: target.to_string(),
        distance,
    }
}

pub fn run_best_match(source: &str, candidates: &[String], max_distance: f64) -> BestMatchReport {
    let span = info_span!("best_match", source, candidates = candidates.len());
    let _guard = span.enter();

    let best_match = find_best_match(source, candidates.iter().map(String::as_str), max_distance);
    match best_match {
        Some(candidate) => info!(candidate, "found best match"),
        None => info!(max_distance, "no candidate within maximum distance"),
    }
    BestMatchReport {
        source: source.to_string(),
        max_distance,
        best_match: best_match.map(str::to_string),
        distance: best_match.map(|candidate| calculate_distance(source, candidate)),
    }
}

/// Parses `raw_values` and selects among them in the given order.
///
/// # Errors
///
/// Fails when `options.throw_if_no_match` is set and no value lies within
/// the threshold.
pub fn run_select(raw_values: &[String], options: SelectionOptions) -> Result<SelectReport> {
    let span = info_span!("select", values = raw_values.len());
    let _guard = span.enter();

    let (values, ignored) = parse_values(raw_values);
    if !ignored.is_empty() {
        warn!(ignored = ?ignored, "ignoring values that are not numbers");
    }
    debug!(?options, "selecting");

    let selection = select_with_deviation_threshold(&values, |value| Some(*value), options)
        .with_context(|| format!("no selection among {} value(s)", values.len()))?;
    info!(selection = ?selection.selection, "selection complete");

    Ok(SelectReport {
        values,
        ignored,
        max_standard_deviations: options.max_standard_deviations,
        use_median: options.use_median,
        selection,
    })
}

fn parse_values(raw_values: &[String]) -> (Vec<f64>, Vec<String>) {
    let mut values = Vec::with_capacity(raw_values.len());
    let mut ignored = Vec::new();
    for raw in raw_values {
        match raw.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => values.push(value),
            _ => ignored.push(raw.clone()),
        }
    }
    (values, ignored)
}
