//! A byte count that reads and writes as a human-readable size.
//!
//! [`ByteSize`] is meant for configuration values: it parses with the same
//! grammar as [`from_human_string`], displays with [`human_size`] (or binary
//! units with `{:#}`), and deserializes from either a plain integer or a
//! size string.
//!
//! ```toml
//! max_upload = "32MiB"
//! chunk = 65536
//! ```

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected, Visitor},
};

use crate::{
    error::ParseSizeError,
    format::human_size,
    parse::from_human_string,
    units::UnitSystem,
};

/// A non-negative number of bytes.
///
/// Serializes as the raw integer so that the value round-trips exactly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ByteSize(u64);

impl ByteSize {
    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Render the size in the given unit system.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_string_as(self, system: UnitSystem) -> String {
        system.format(self.0 as f64)
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl FromStr for ByteSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = from_human_string(s)?;
        u64::try_from(bytes)
            .map(Self)
            .map_err(|_| ParseSizeError::invalid_format(s))
    }
}

impl fmt::Display for ByteSize {
    /// Decimal units by default, binary units with the alternate flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(&self.to_string_as(UnitSystem::Binary))
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rendered = human_size(self.0 as f64);
            f.pad(&rendered)
        }
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ByteSizeVisitor)
    }
}

struct ByteSizeVisitor;

impl Visitor<'_> for ByteSizeVisitor {
    type Value = ByteSize;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a byte count or a size string such as \"32MiB\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ByteSize(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(ByteSize)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}
