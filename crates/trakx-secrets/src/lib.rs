//! Secret loading for trakx services and their tests.
//!
//! Secrets are looked up by [`SecretKey`] in a [`SecretSource`]: the process
//! environment, a `.env` file found at the repository root, a plain map, or a
//! layered combination of those. Nothing here writes to the process
//! environment.
//!
//! Typed secret bundles implement [`FromSecrets`] and are built with
//! [`SecretsProvider::bind`].

#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod repository;
pub mod source;

pub use error::{Result, SecretsError};
pub use provider::{DiscoveredSecrets, FromSecrets, SecretKey, SecretsProvider};
pub use repository::{default_env_file_path, find_repository_root, is_repository_root};
pub use source::{EnvFile, Layered, ProcessEnvironment, SecretSource};
