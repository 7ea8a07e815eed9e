//! Byte count formatting.
//!
//! Sizes are scaled down by the unit system's base until they fit the
//! largest sensible unit, then rendered with four significant digits in the
//! shortest of fixed or scientific notation (`1KiB`, `3.42GiB`, `1.049MB`,
//! `1e+04YB`). No separator is placed between the number and the unit.
//!
//! Formatting is only specified for finite, non-negative sizes. Negative
//! sizes are never scaled and render as bytes; non-finite sizes render with
//! the float's own `Display`. Neither case is an error.

use crate::units::UnitSystem;

const SIGNIFICANT_DIGITS: usize = 4;

/// Format `size` bytes using decimal units (e.g. `"32kB"`, `"1.049MB"`).
///
/// Identical to [`human_decimal_size`].
#[must_use]
pub fn human_size(size: f64) -> String {
    human_decimal_size(size)
}

/// Format `size` bytes using decimal units (powers of 1000).
#[must_use]
pub fn human_decimal_size(size: f64) -> String {
    UnitSystem::Decimal.format(size)
}

/// Format `size` bytes using binary units (powers of 1024, e.g. `"32KiB"`).
#[must_use]
pub fn human_binary_size(size: f64) -> String {
    UnitSystem::Binary.format(size)
}

impl UnitSystem {
    /// Format `size` bytes in this unit system.
    ///
    /// Sizes beyond the largest unit stay in that unit, so `1e28` bytes
    /// renders as `"1e+04YB"`.
    #[must_use]
    pub fn format(self, size: f64) -> String {
        let (value, unit) = scale(size, self.base(), self.symbols());
        format!("{}{unit}", format_significant(value, SIGNIFICANT_DIGITS))
    }
}

/// Divide `size` by `base` until it drops below `base` or the table runs out.
fn scale(mut size: f64, base: f64, symbols: &[&'static str]) -> (f64, &'static str) {
    let last = symbols.len() - 1;
    let mut index = 0;

    while size >= base && index < last {
        size /= base;
        index += 1;
    }

    (size, symbols[index])
}

/// Render `value` with `precision` significant digits, `%g` style.
///
/// Scientific notation is used when the rounded exponent is below -4 or at
/// least `precision`; trailing zeros are dropped in both notations.
fn format_significant(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", precision.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let precision = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

/// Strip trailing zeros, and then a bare trailing point, from a decimal.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
