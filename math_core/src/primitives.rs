//! # Numeric Primitives
//!
//! Shared integer helpers (GCD/LCM) and safe input parsing. Everything else
//! in the engine builds on these; they have no dependencies of their own.

use crate::errors::{CalcError, CalcResult};

/// Greatest common divisor via the Euclidean algorithm.
///
/// Operates on absolute values, so the result is always non-negative.
/// `gcd(0, 0)` is 0; callers that divide by the result (fraction
/// simplification) must not pass two zeros.
///
/// # Example
///
/// ```rust
/// use math_core::primitives::gcd;
///
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(-4, 6), 2);
/// assert_eq!(gcd(0, 5), 5);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// Least common multiple, computed as `|a·b| / gcd(a, b)`.
///
/// Undefined when either operand is zero - callers must special-case zero
/// operands before calling (the catalog's LCM calculator reports 0 for them
/// without invoking this).
pub fn lcm(a: i64, b: i64) -> i64 {
    let g = gcd(a, b);
    (a / g * b).abs()
}

/// Parse a finite decimal number, rejecting NaN/infinity and garbage.
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::invalid_input(field, raw, "Expected a decimal number"))
}

/// Parse a signed integer.
pub fn parse_integer(field: &str, raw: &str) -> CalcResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CalcError::invalid_input(field, raw, "Expected an integer"))
}

/// Parse a comma/whitespace-separated list of numbers.
///
/// Unparsable entries are skipped rather than rejected, matching the
/// permissive list handling of the calculator forms; an input that yields
/// no numbers at all is an error.
pub fn parse_number_list(field: &str, raw: &str) -> CalcResult<Vec<f64>> {
    let values: Vec<f64> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return Err(CalcError::invalid_input(
            field,
            raw,
            "Expected at least one number",
        ));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(7, 13), 1);
    }

    #[test]
    fn test_gcd_zero_and_sign() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(-4, -6), 2);
    }

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(12, 18), 36);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(-4, 6), 12);
        assert_eq!(lcm(7, 1), 7);
    }

    #[test]
    fn test_gcd_lcm_identity() {
        for (a, b) in [(12, 18), (7, 13), (100, 75), (-9, 12)] {
            assert_eq!(gcd(a, b) * lcm(a, b), (a * b).abs());
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("x", " 3.5 ").unwrap(), 3.5);
        assert!(parse_number("x", "abc").is_err());
        assert!(parse_number("x", "inf").is_err());
        assert!(parse_number("x", "NaN").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("n", "-17").unwrap(), -17);
        assert!(parse_integer("n", "2.5").is_err());
    }

    #[test]
    fn test_parse_number_list() {
        assert_eq!(
            parse_number_list("terms", "1, 2.5  3").unwrap(),
            vec![1.0, 2.5, 3.0]
        );
        // invalid tokens are skipped, not fatal
        assert_eq!(
            parse_number_list("terms", "1, x, 3").unwrap(),
            vec![1.0, 3.0]
        );
        assert!(parse_number_list("terms", "  ").is_err());
        assert!(parse_number_list("terms", "a, b").is_err());
    }
}
