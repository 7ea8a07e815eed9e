//! # readable-bytes
//!
//! Convert byte counts to human-readable sizes and back.
//!
//! ## Formatting
//!
//! Sizes are rendered with four significant digits and no space before the
//! unit, in decimal (powers of 1000) or binary (powers of 1024) units:
//!
//! ```
//! use readable_bytes::{human_binary_size, human_size};
//!
//! assert_eq!(human_size(1000.0), "1kB");
//! assert_eq!(human_size(1_048_576.0), "1.049MB");
//! assert_eq!(human_binary_size(1024.0), "1KiB");
//! ```
//!
//! ## Parsing
//!
//! [`from_human_string`] reads `<number>[ ][k|m|g|t|p][i][b]`,
//! case-insensitively. A prefix letter is decimal unless followed by `i`:
//!
//! ```
//! use readable_bytes::from_human_string;
//!
//! assert_eq!(from_human_string("32kb"), Ok(32_000));
//! assert_eq!(from_human_string("32Kib"), Ok(32_768));
//! assert!(from_human_string("-32").is_err());
//! ```
//!
//! ## Configuration values
//!
//! [`ByteSize`] wraps a byte count for use in `serde` configuration structs,
//! accepting either an integer or a size string.
//!
//! All functions are pure and thread-safe. Rejected inputs are reported
//! through `tracing` at debug level.

pub mod error;
pub mod format;
pub mod parse;
pub mod size;
pub mod units;

pub use error::{INVALID_SIZE, ParseSizeError};
pub use format::{human_binary_size, human_decimal_size, human_size};
pub use parse::from_human_string;
pub use size::ByteSize;
pub use units::{GB, GIB, KB, KIB, MB, MIB, PB, PIB, TB, TIB, UnitPrefix, UnitSystem};
