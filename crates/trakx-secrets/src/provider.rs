//! Typed access to secrets.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SecretsError};
use crate::repository::default_env_file_path;
use crate::source::{EnvFile, Layered, ProcessEnvironment, SecretSource};

/// Name of a secret variable.
///
/// Implicit names join a section and a property with a double underscore,
/// e.g. `ExchangeApiConfiguration__ApiKey`, matching how hierarchical
/// configuration is flattened into environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn explicit(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn implicit(section: &str, property: &str) -> Self {
        Self(format!("{section}__{property}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bundle of secrets that can be read from a [`SecretsProvider`].
pub trait FromSecrets: Sized {
    fn from_secrets<S: SecretSource>(secrets: &SecretsProvider<S>) -> Result<Self>;
}

/// Process environment first, then the repository `.env` file if there is one.
pub type DiscoveredSecrets = Layered<ProcessEnvironment, Option<EnvFile>>;

#[derive(Debug, Clone)]
pub struct SecretsProvider<S> {
    source: S,
}

impl<S: SecretSource> SecretsProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The secret value, `None` when unset or empty.
    pub fn get(&self, key: &SecretKey) -> Option<String> {
        self.source
            .lookup(key.as_str())
            .filter(|value| !value.is_empty())
    }

    /// # Errors
    ///
    /// [`SecretsError::Missing`] when the secret is unset or empty.
    pub fn require(&self, key: &SecretKey) -> Result<String> {
        self.get(key).ok_or_else(|| SecretsError::Missing {
            key: key.to_string(),
        })
    }

    /// Parses the secret when it is set.
    ///
    /// # Errors
    ///
    /// [`SecretsError::Invalid`] when the value does not parse.
    pub fn parse<V>(&self, key: &SecretKey) -> Result<Option<V>>
    where
        V: FromStr,
        V::Err: fmt::Display,
    {
        self.get(key)
            .map(|raw| {
                raw.trim().parse().map_err(|error: V::Err| SecretsError::Invalid {
                    key: key.to_string(),
                    message: error.to_string(),
                })
            })
            .transpose()
    }

    pub fn bind<T: FromSecrets>(&self) -> Result<T> {
        T::from_secrets(self)
    }
}

impl SecretsProvider<DiscoveredSecrets> {
    /// Reads the process environment, falling back to `<root>/src/.env` of the
    /// repository containing `start`.
    ///
    /// A missing repository root or env file is not an error.
    ///
    /// # Errors
    ///
    /// [`SecretsError::EnvFile`] when the env file exists but cannot be parsed.
    pub fn discover(start: &Path) -> Result<Self> {
        let env_file = match default_env_file_path(start) {
            Some(path) if path.is_file() => {
                tracing::info!(path = %path.display(), "using env file");
                Some(EnvFile::load(&path)?)
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "no env file at repository root");
                None
            }
            None => {
                tracing::debug!(
                    start = %start.display(),
                    "no repository root found, using the process environment only"
                );
                None
            }
        };
        Ok(Self::new(Layered::new(ProcessEnvironment, env_file)))
    }
}
