use thiserror::Error;

/// Errors raised by preference selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error(
        "failed to find a valid value within {max_standard_deviations} standard deviations \
         of the center, with mean {mean}, median {median} and standard deviation {standard_deviation}"
    )]
    NoMatchWithinDeviationThreshold {
        mean: f64,
        standard_deviation: f64,
        median: f64,
        max_standard_deviations: f64,
    },
}

pub type Result<T> = std::result::Result<T, SelectionError>;
