//! Ethereum address validation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CommonError;

/// `0x` followed by 40 hexadecimal digits, either case. Checksums are not verified.
static ETHEREUM_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("Invalid ethereum address regex")
});

/// Returns true when `address` looks like an Ethereum address.
pub fn is_valid_ethereum_address(address: &str) -> bool {
    ETHEREUM_ADDRESS_REGEX.is_match(address)
}

/// A syntactically valid Ethereum address, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EthereumAddress(String);

impl EthereumAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EthereumAddress {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_ethereum_address(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CommonError::InvalidEthereumAddress(s.to_string()))
        }
    }
}

impl TryFrom<&str> for EthereumAddress {
    type Error = CommonError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EthereumAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for EthereumAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EthereumAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
