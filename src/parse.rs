//! Human-readable size parsing.
//!
//! Accepts strings of the form `<number>[ ][k|m|g|t|p][i][b]`, matched
//! case-insensitively against the whole input:
//!
//! - `<number>` is one or more ASCII digits, optionally followed by a `.` and
//!   one or more digits. No sign, no leading `.`.
//! - A single space may separate the number from the unit block. No other
//!   whitespace is allowed anywhere, so `"32.5 kB"` parses but `" 32 "` does
//!   not.
//! - A prefix letter selects a decimal multiplier (`32kb` = 32000), or a
//!   binary one when followed by `i` (`32KiB` = 32768).
//! - Without a prefix letter the number is plain bytes, whatever follows.
//!
//! The product is truncated toward zero.

use tracing::debug;

use crate::{
    error::ParseSizeError,
    units::{UnitPrefix, UnitSystem},
};

// 2^63, the first f64 that no longer fits in an i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A size string split into its grammar parts.
#[derive(Debug, PartialEq)]
struct Quantity<'a> {
    number: &'a str,
    prefix: Option<UnitPrefix>,
    binary: bool,
}

impl Quantity<'_> {
    /// Bytes per unit of `number`.
    fn multiplier(&self) -> i64 {
        let system = if self.binary {
            UnitSystem::Binary
        } else {
            UnitSystem::Decimal
        };
        self.prefix.map_or(1, |prefix| system.multiplier(prefix))
    }
}

/// Parse a human-readable size string into a byte count.
///
/// # Errors
///
/// Returns [`ParseSizeError::InvalidFormat`] if the string does not match the
/// size grammar or the byte count does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// # use readable_bytes::from_human_string;
/// assert_eq!(from_human_string("32").unwrap(), 32);
/// assert_eq!(from_human_string("32kb").unwrap(), 32_000);
/// assert_eq!(from_human_string("32Kib").unwrap(), 32_768);
/// assert_eq!(from_human_string("32.5 kB").unwrap(), 32_500);
/// assert!(from_human_string(" 32 ").is_err());
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn from_human_string(input: &str) -> Result<i64, ParseSizeError> {
    let quantity = tokenize(input).map_err(|reason| reject(input, reason))?;

    let magnitude: f64 = quantity
        .number
        .parse()
        .map_err(|_| reject(input, "malformed number"))?;

    let bytes = (magnitude * quantity.multiplier() as f64).trunc();
    if bytes >= I64_LIMIT {
        return Err(reject(input, "size does not fit in 64 bits"));
    }

    Ok(bytes as i64)
}

fn reject(input: &str, reason: &'static str) -> ParseSizeError {
    debug!(input, reason, "rejected size string");
    ParseSizeError::invalid_format(input)
}

/// Split `input` into number, prefix and binary flag, consuming it entirely.
fn tokenize(input: &str) -> Result<Quantity<'_>, &'static str> {
    let bytes = input.as_bytes();

    let mut pos = leading_digits(bytes);
    if pos == 0 {
        return Err("expected a digit");
    }

    if bytes.get(pos) == Some(&b'.') {
        let fraction = leading_digits(&bytes[pos + 1..]);
        if fraction == 0 {
            return Err("expected a digit after the decimal point");
        }
        pos += 1 + fraction;
    }

    let number = &input[..pos];

    if bytes.get(pos) == Some(&b' ') {
        pos += 1;
    }

    let prefix = bytes.get(pos).copied().and_then(UnitPrefix::from_letter);
    if prefix.is_some() {
        pos += 1;
    }

    let binary = matches!(bytes.get(pos), Some(b'i' | b'I'));
    if binary {
        pos += 1;
    }

    if matches!(bytes.get(pos), Some(b'b' | b'B')) {
        pos += 1;
    }

    if pos != bytes.len() {
        return Err("unexpected trailing characters");
    }

    Ok(Quantity {
        number,
        prefix,
        binary,
    })
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
