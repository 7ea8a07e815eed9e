//! Error type returned when a size string cannot be parsed.

use thiserror::Error;

/// Numeric value reported alongside a parse failure.
///
/// Callers that prefer a single numeric channel can write
/// `from_human_string(s).unwrap_or(INVALID_SIZE)`.
pub const INVALID_SIZE: i64 = -1;

/// Errors produced by [`from_human_string`](crate::from_human_string).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    /// The input does not match `<number>[ ][kmgtp][i][b]`, or the resulting
    /// byte count does not fit in an `i64`.
    #[error("invalid size: '{input}'")]
    InvalidFormat { input: String },
}

impl ParseSizeError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }

    /// The rejected input string.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } => input,
        }
    }

    /// The sentinel byte count paired with this error, always [`INVALID_SIZE`].
    #[must_use]
    pub const fn sentinel(&self) -> i64 {
        INVALID_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseSizeError::invalid_format("32bm");
        assert_eq!(err.to_string(), "invalid size: '32bm'");
    }

    #[test]
    fn test_input_and_sentinel() {
        let err = ParseSizeError::invalid_format(" 32 ");
        assert_eq!(err.input(), " 32 ");
        assert_eq!(err.sentinel(), -1);
        assert_eq!(INVALID_SIZE, -1);
    }
}
