//! Error types for secret loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretsError {
    /// A required secret is not set in any source.
    #[error("secret {key} is not set, check the environment or the .env file")]
    Missing { key: String },

    /// A secret is set but does not parse into the requested type.
    #[error("secret {key} has an invalid value: {message}")]
    Invalid { key: String, message: String },

    /// The .env file exists but could not be read or parsed.
    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

pub type Result<T> = std::result::Result<T, SecretsError>;
