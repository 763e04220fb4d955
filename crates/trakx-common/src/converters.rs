//! Serde adapters for loosely typed JSON payloads.
//!
//! Exchange and market data APIs are inconsistent about types: integers come
//! as strings, missing dates as `""` or `"null"`, enum values in any case.
//! These modules are meant for `#[serde(with = "...")]`.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Unexpected, Visitor};

struct StringOrInteger<T>(PhantomData<T>);

impl<T> StringOrInteger<T> {
    fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Visitor<'_> for StringOrInteger<T>
where
    T: TryFrom<i64> + TryFrom<u64> + FromStr,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        <T as TryFrom<i64>>::try_from(v)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        <T as TryFrom<u64>>::try_from(v)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// `i64` read from a JSON number or numeric string, written as a string.
pub mod string_or_i64 {
    use serde::{Deserializer, Serializer};

    use super::StringOrInteger;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(StringOrInteger::new())
    }
}

/// `u64` read from a JSON number or numeric string, written as a string.
pub mod string_or_u64 {
    use serde::{Deserializer, Serializer};

    use super::StringOrInteger;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(StringOrInteger::new())
    }
}

/// `Option<DateTime<FixedOffset>>` where blank strings and `"null"` mean `None`.
///
/// `None` is written as an empty string, `Some` as RFC 3339.
pub mod nullable_datetime {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date_time) => serializer.serialize_str(&date_time.to_rfc3339()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(Some)
            .map_err(|error| de::Error::custom(format!("invalid date/time {raw:?}: {error}")))
    }
}

/// Enums that can be parsed case-insensitively through their variant names.
pub trait LenientEnum: FromStr + fmt::Display {
    /// Canonical spelling of every variant, as accepted by `FromStr`.
    const VARIANTS: &'static [&'static str];
}

/// `Option<E>` for a [`LenientEnum`]: empty strings and `null` are `None`,
/// parsing is exact first and case-insensitive second.
pub mod lenient_enum {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::LenientEnum;

    pub fn serialize<E: LenientEnum, S: Serializer>(
        value: &Option<E>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(variant) => serializer.collect_str(variant),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, E: LenientEnum, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<E>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(variant) = raw.parse::<E>() {
            return Ok(Some(variant));
        }

        let canonical = E::VARIANTS
            .iter()
            .find(|name| name.eq_ignore_ascii_case(&raw))
            .ok_or_else(|| {
                <D::Error as de::Error>::custom(format!(
                    "unable to convert {raw:?} to enum, expected one of: {}",
                    E::VARIANTS.join(", ")
                ))
            })?;
        tracing::debug!(
            raw = raw.as_str(),
            canonical = *canonical,
            "enum value matched ignoring case"
        );
        canonical
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("variant {canonical:?} does not parse")))
    }
}
