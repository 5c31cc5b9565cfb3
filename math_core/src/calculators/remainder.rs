//! # Remainder and Modulo
//!
//! Floor-based Euclidean division with both leftover conventions reported
//! side by side: the floor-division remainder and the always-non-negative
//! modulo.
//!
//! Semantics, fixed and tested rather than left to host defaults:
//!
//! - `quotient = floor(dividend / divisor)`
//! - `remainder = dividend - quotient · divisor`
//! - `modulo ∈ [0, |divisor|)` for every non-zero divisor
//!
//! The identity `dividend = quotient × divisor + remainder` holds exactly
//! and is exposed as a derivation step.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Result of one remainder/modulo computation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "quotient": -3,
///   "remainder": 2,
///   "modulo": 2,
///   "steps": [
///     "-7 ÷ 3 = -3 remainder 2",
///     "Verification: -7 = -3 × 3 + 2",
///     "Modulo (always non-negative): -7 mod 3 = 2"
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemainderResult {
    pub quotient: i64,
    pub remainder: i64,
    pub modulo: i64,
    pub steps: Vec<String>,
}

/// Quotient rounded toward negative infinity.
fn floor_div(a: i64, n: i64) -> i64 {
    let q = a / n;
    if a % n != 0 && (a < 0) != (n < 0) {
        q - 1
    } else {
        q
    }
}

/// Compute quotient, remainder, and non-negative modulo.
///
/// # Example
///
/// ```rust
/// use math_core::calculators::remainder::compute;
///
/// let r = compute(-7, 3).unwrap();
/// assert_eq!((r.quotient, r.remainder, r.modulo), (-3, 2, 2));
/// ```
pub fn compute(dividend: i64, divisor: i64) -> CalcResult<RemainderResult> {
    if divisor == 0 {
        return Err(CalcError::division_by_zero("remainder/modulo"));
    }

    let quotient = floor_div(dividend, divisor);
    let remainder = dividend - quotient * divisor;
    let modulo = dividend.rem_euclid(divisor);

    let steps = vec![
        format!(
            "{} ÷ {} = {} remainder {}",
            dividend, divisor, quotient, remainder
        ),
        format!(
            "Verification: {} = {} × {} + {}",
            dividend, quotient, divisor, remainder
        ),
        format!(
            "Modulo (always non-negative): {} mod {} = {}",
            dividend, divisor, modulo
        ),
    ];

    Ok(RemainderResult {
        quotient,
        remainder,
        modulo,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_operands() {
        let r = compute(17, 5).unwrap();
        assert_eq!((r.quotient, r.remainder, r.modulo), (3, 2, 2));
        assert_eq!(r.steps[0], "17 ÷ 5 = 3 remainder 2");
    }

    #[test]
    fn test_negative_dividend() {
        let r = compute(-7, 3).unwrap();
        assert_eq!((r.quotient, r.remainder, r.modulo), (-3, 2, 2));
        assert_eq!(r.steps[1], "Verification: -7 = -3 × 3 + 2");
    }

    #[test]
    fn test_negative_divisor() {
        let r = compute(7, -3).unwrap();
        assert_eq!((r.quotient, r.remainder, r.modulo), (-3, -2, 1));
    }

    #[test]
    fn test_both_negative() {
        let r = compute(-7, -3).unwrap();
        assert_eq!((r.quotient, r.remainder, r.modulo), (2, -1, 2));
    }

    #[test]
    fn test_exact_division() {
        let r = compute(-12, 4).unwrap();
        assert_eq!((r.quotient, r.remainder, r.modulo), (-3, 0, 0));
    }

    #[test]
    fn test_zero_dividend() {
        let r = compute(0, 5).unwrap();
        assert_eq!((r.quotient, r.remainder, r.modulo), (0, 0, 0));
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let err = compute(5, 0).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_verification_identity() {
        for (a, n) in [(17, 5), (-7, 3), (7, -3), (-7, -3), (0, 9), (100, 7)] {
            let r = compute(a, n).unwrap();
            assert_eq!(r.quotient * n + r.remainder, a);
            assert!(r.modulo >= 0 && r.modulo < n.abs());
        }
    }
}
