//! Places secrets are read from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, SecretsError};

/// Read-only lookup of secret values by variable name.
pub trait SecretSource {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

impl<S: SecretSource> SecretSource for Option<S> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.as_ref().and_then(|source| source.lookup(name))
    }
}

impl SecretSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// The environment of the current process.
///
/// Variables whose value is not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl SecretSource for ProcessEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Variables parsed from a `.env` file, held in memory.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl EnvFile {
    /// Parses `path` without touching the process environment.
    ///
    /// Later assignments of the same variable override earlier ones.
    pub fn load(path: &Path) -> Result<Self> {
        let to_error = |source| SecretsError::EnvFile {
            path: path.to_path_buf(),
            source,
        };
        let values = dotenvy::from_path_iter(path)
            .map_err(to_error)?
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()
            .map_err(to_error)?;

        tracing::debug!(
            path = %path.display(),
            variables = values.len(),
            "loaded env file"
        );
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Variable names defined in the file, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretSource for EnvFile {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.lookup(name)
    }
}

/// Two sources, the first one taking precedence.
#[derive(Debug, Clone, Default)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P: SecretSource, F: SecretSource> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: SecretSource, F: SecretSource> SecretSource for Layered<P, F> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.primary
            .lookup(name)
            .or_else(|| self.fallback.lookup(name))
    }
}
