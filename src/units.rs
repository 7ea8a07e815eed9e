//! Unit constants and lookup tables.
//!
//! Two unit systems are supported: decimal (powers of 1000, `kB`, `MB`, ...)
//! and binary (powers of 1024, `KiB`, `MiB`, ...). Each system owns two
//! ordered tables: the symbols used when formatting and the multipliers used
//! when parsing a prefix letter. Both advance by the system's base per step.

use serde::Deserialize;

/// One kilobyte (10^3 bytes).
pub const KB: i64 = 1000;
/// One megabyte (10^6 bytes).
pub const MB: i64 = 1000 * KB;
/// One gigabyte (10^9 bytes).
pub const GB: i64 = 1000 * MB;
/// One terabyte (10^12 bytes).
pub const TB: i64 = 1000 * GB;
/// One petabyte (10^15 bytes).
pub const PB: i64 = 1000 * TB;

/// One kibibyte (2^10 bytes).
pub const KIB: i64 = 1024;
/// One mebibyte (2^20 bytes).
pub const MIB: i64 = 1024 * KIB;
/// One gibibyte (2^30 bytes).
pub const GIB: i64 = 1024 * MIB;
/// One tebibyte (2^40 bytes).
pub const TIB: i64 = 1024 * GIB;
/// One pebibyte (2^50 bytes).
pub const PIB: i64 = 1024 * TIB;

const DECIMAL_SYMBOLS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_SYMBOLS: [&str; 9] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

// Indexed by `UnitPrefix as usize`.
const DECIMAL_MULTIPLIERS: [i64; 5] = [KB, MB, GB, TB, PB];
const BINARY_MULTIPLIERS: [i64; 5] = [KIB, MIB, GIB, TIB, PIB];

/// Selects the base and unit tables used to format or parse a size.
///
/// Deserializes from `"decimal"` or `"binary"`, so it can be embedded in a
/// caller's configuration file.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Powers of 1000 (`kB`, `MB`, `GB`, ...)
    #[default]
    Decimal,

    /// Powers of 1024 (`KiB`, `MiB`, `GiB`, ...)
    Binary,
}

impl UnitSystem {
    /// The multiplier between two adjacent units.
    #[must_use]
    pub const fn base(self) -> f64 {
        match self {
            Self::Decimal => 1000.0,
            Self::Binary => 1024.0,
        }
    }

    /// Unit symbols in increasing magnitude, starting at bytes.
    #[must_use]
    pub const fn symbols(self) -> &'static [&'static str] {
        match self {
            Self::Decimal => &DECIMAL_SYMBOLS,
            Self::Binary => &BINARY_SYMBOLS,
        }
    }

    /// Number of bytes represented by `prefix` in this system.
    #[must_use]
    pub const fn multiplier(self, prefix: UnitPrefix) -> i64 {
        let table = match self {
            Self::Decimal => &DECIMAL_MULTIPLIERS,
            Self::Binary => &BINARY_MULTIPLIERS,
        };
        table[prefix as usize]
    }
}

/// A unit prefix letter accepted by the parser.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitPrefix {
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

impl UnitPrefix {
    /// Map a prefix letter (`k`, `m`, `g`, `t`, `p`, any case) to a prefix.
    #[must_use]
    pub const fn from_letter(letter: u8) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            b'k' => Some(Self::Kilo),
            b'm' => Some(Self::Mega),
            b'g' => Some(Self::Giga),
            b't' => Some(Self::Tera),
            b'p' => Some(Self::Peta),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: [UnitPrefix; 5] = [
        UnitPrefix::Kilo,
        UnitPrefix::Mega,
        UnitPrefix::Giga,
        UnitPrefix::Tera,
        UnitPrefix::Peta,
    ];

    #[test]
    fn test_constants() {
        assert_eq!(KB, 1_000);
        assert_eq!(PB, 1_000_000_000_000_000);
        assert_eq!(KIB, 1 << 10);
        assert_eq!(MIB, 1 << 20);
        assert_eq!(GIB, 1 << 30);
        assert_eq!(TIB, 1 << 40);
        assert_eq!(PIB, 1 << 50);
    }

    #[test]
    fn test_multipliers_advance_by_base() {
        for system in [UnitSystem::Decimal, UnitSystem::Binary] {
            #[allow(clippy::cast_possible_truncation)]
            let base = system.base() as i64;
            let mut expected = 1;
            for prefix in PREFIXES {
                expected *= base;
                assert_eq!(system.multiplier(prefix), expected, "{system:?} {prefix:?}");
            }
        }
    }

    #[test]
    fn test_symbol_tables_line_up_with_multipliers() {
        assert_eq!(UnitSystem::Decimal.symbols().len(), 9);
        assert_eq!(UnitSystem::Binary.symbols().len(), 9);
        assert_eq!(UnitSystem::Decimal.symbols()[0], "B");
        assert_eq!(UnitSystem::Binary.symbols()[0], "B");

        // Symbol n + 1 names the unit of multiplier n.
        for (i, prefix) in PREFIXES.iter().enumerate() {
            let letter = UnitSystem::Binary.symbols()[i + 1].as_bytes()[0];
            assert_eq!(UnitPrefix::from_letter(letter), Some(*prefix));
            let letter = UnitSystem::Decimal.symbols()[i + 1].as_bytes()[0];
            assert_eq!(UnitPrefix::from_letter(letter), Some(*prefix));
        }
        assert!(UnitSystem::Binary.symbols()[1..].iter().all(|s| s.ends_with("iB")));
        assert!(!UnitSystem::Decimal.symbols().iter().any(|s| s.contains('i')));
    }

    #[test]
    fn test_from_letter_case_insensitive() {
        assert_eq!(UnitPrefix::from_letter(b'k'), Some(UnitPrefix::Kilo));
        assert_eq!(UnitPrefix::from_letter(b'K'), Some(UnitPrefix::Kilo));
        assert_eq!(UnitPrefix::from_letter(b'P'), Some(UnitPrefix::Peta));
        assert_eq!(UnitPrefix::from_letter(b'e'), None);
        assert_eq!(UnitPrefix::from_letter(b'b'), None);
        assert_eq!(UnitPrefix::from_letter(b'i'), None);
    }

    #[test]
    fn test_unit_system_default_is_decimal() {
        assert_eq!(UnitSystem::default(), UnitSystem::Decimal);
    }
}
