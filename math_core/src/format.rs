//! # Numeric Formatting
//!
//! Fixed-decimal, significant-digit, and exponential formatting with the
//! digit-count semantics the presentation layer relies on. The three
//! functions mirror the `toFixed` / `toPrecision` / `toExponential` family
//! of conventions: callers pick digit counts, the engine produces strings
//! that are stable across call sites and asserted verbatim in tests.
//!
//! ## Rounding tie-break
//!
//! All three functions delegate the boundary-digit rounding to Rust's
//! decimal formatter, which rounds the *exact binary value* of the f64 and
//! breaks exact decimal ties to even. This is an observable behavior of the
//! engine, not an internal detail: exact `.5` boundaries round to the even
//! neighbor (`1.25` at 1 decimal is `1.2`, not `1.3`). The one place the
//! engine rounds a scaled value with [`f64::round`] instead (significant-
//! figure rounding) is documented at that call site.

use serde::{Deserialize, Serialize};

/// Formatting configuration shared by conversion entry points.
///
/// Plain data, serializable, passed explicitly - the engine itself holds no
/// state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Fractional digits for mantissa/decimal rendering
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

/// Format with a fixed number of fractional digits.
///
/// `to_fixed(3.14159, 2)` is `"3.14"`; `to_fixed(2.0, 3)` is `"2.000"`.
/// Negative values keep their sign; no exponent form is ever produced.
pub fn to_fixed(x: f64, digits: usize) -> String {
    format!("{:.*}", digits, x)
}

/// Format in exponential notation with `digits` fractional mantissa digits.
///
/// The exponent always carries an explicit sign and no leading zeros:
/// `to_exponential(299792458.0, 6)` is `"2.997925e+8"`,
/// `to_exponential(0.00123, 2)` is `"1.23e-3"`.
pub fn to_exponential(x: f64, digits: usize) -> String {
    let s = format!("{:.*e}", digits, x);
    match s.find('e') {
        Some(pos) if !s[pos + 1..].starts_with('-') => {
            format!("{}e+{}", &s[..pos], &s[pos + 1..])
        }
        _ => s,
    }
}

/// Format with `sig` significant digits.
///
/// Values whose decimal exponent lies in `[-6, sig)` are rendered in fixed
/// notation padded or rounded to exactly `sig` significant digits; values
/// outside that window switch to exponential notation with `sig - 1`
/// fractional digits, matching the conventional `toPrecision` switchover.
///
/// `sig` must be at least 1; this is a programmer contract, not user input,
/// so it is debug-asserted rather than surfaced as a result-level error.
pub fn to_precision(x: f64, sig: usize) -> String {
    debug_assert!(sig >= 1, "to_precision requires at least one digit");
    if x == 0.0 {
        return to_fixed(0.0, sig.saturating_sub(1));
    }

    let e = x.abs().log10().floor() as i32;
    if e < -6 || e >= sig as i32 {
        to_exponential(x, sig.saturating_sub(1))
    } else {
        let decimals = (sig as i32 - 1 - e).max(0) as usize;
        to_fixed(x, decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(3.14159, 2), "3.14");
        assert_eq!(to_fixed(2.0, 3), "2.000");
        assert_eq!(to_fixed(-0.5, 1), "-0.5");
        assert_eq!(to_fixed(1.237, 2), "1.24");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(299792458.0, 6), "2.997925e+8");
        assert_eq!(to_exponential(0.00123, 2), "1.23e-3");
        assert_eq!(to_exponential(-1500.0, 1), "-1.5e+3");
        assert_eq!(to_exponential(0.0, 2), "0.00e+0");
    }

    #[test]
    fn test_to_precision_fixed_window() {
        assert_eq!(to_precision(0.0023, 2), "0.0023");
        assert_eq!(to_precision(1.5, 3), "1.50");
        assert_eq!(to_precision(12.25, 4), "12.25");
    }

    #[test]
    fn test_to_precision_exponential_window() {
        // exponent >= sig switches to exponential form
        assert_eq!(to_precision(123.0, 2), "1.2e+2");
        // very small magnitudes switch as well
        assert_eq!(to_precision(0.0000001, 1), "1e-7");
    }

    #[test]
    fn test_to_precision_zero() {
        assert_eq!(to_precision(0.0, 3), "0.00");
    }

    #[test]
    fn test_format_options_default() {
        assert_eq!(FormatOptions::default().precision, 6);
    }

    #[test]
    fn test_format_options_serialization() {
        let opts = FormatOptions { precision: 4 };
        let json = serde_json::to_string(&opts).unwrap();
        let roundtrip: FormatOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, roundtrip);
    }
}
