use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    #[error("must be a valid ethereum address: {0}")]
    InvalidEthereumAddress(String),

    #[error("10^{exponent} cannot be represented exactly")]
    PowerOfTenOverflow { exponent: i32 },

    #[error("cannot round date/time: {0}")]
    Rounding(#[from] chrono::RoundingError),

    #[error("interval ends ({end}) before it starts ({start})")]
    InvalidInterval { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, CommonError>;
