//! Shared helpers used across trakx services.
//!
//! Small, dependency-light building blocks: string and CSV handling, Ethereum
//! address validation, token quantity scaling, date/time arithmetic, token
//! symbol mapping, collection helpers and serde adapters for loosely typed
//! JSON payloads.

#![deny(unsafe_code)]

pub mod collections;
pub mod converters;
pub mod datetime;
pub mod error;
pub mod ethereum;
pub mod numbers;
pub mod strings;
pub mod symbols;

pub use error::{CommonError, Result};
pub use ethereum::{EthereumAddress, is_valid_ethereum_address};
