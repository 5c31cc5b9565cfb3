//! # Fraction Arithmetic
//!
//! Exact fraction arithmetic with worked derivation steps: construction,
//! simplification, mixed/improper conversion, the four operations, and an
//! integer-only comparison.
//!
//! ## Conventions
//!
//! - A simplified fraction always carries its sign on the numerator and
//!   keeps the denominator positive.
//! - Operations never mutate their inputs; every call returns a fresh
//!   [`FractionResult`] with its own step list.
//! - Addition and subtraction go through the least common multiple of the
//!   denominators, and the steps show the LCM and both scaled numerators
//!   before combining.
//!
//! ## Example
//!
//! ```rust
//! use math_core::calculators::fraction::{self, Fraction};
//!
//! let a = Fraction::new(1, 2).unwrap();
//! let b = Fraction::new(1, 3).unwrap();
//! let result = fraction::add(a, b).unwrap();
//!
//! assert_eq!(result.value, Fraction::new(5, 6).unwrap());
//! assert!(result.steps[0].contains("6"));
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::primitives::{gcd, lcm};

/// An exact rational number `numerator / denominator`.
///
/// Invariant: `denominator != 0`. Construct through [`Fraction::new`] or
/// [`Fraction::from_mixed`], which enforce it; the fields stay public for
/// clean JSON (`{"numerator": 5, "denominator": 6}`).
///
/// Equality is structural, so `1/2 != 2/4`; use [`compare`] for numeric
/// ordering across unreduced forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    /// Create a fraction, rejecting a zero denominator.
    pub fn new(numerator: i64, denominator: i64) -> CalcResult<Self> {
        if denominator == 0 {
            return Err(CalcError::domain_error(
                "fraction construction",
                "Denominator must be non-zero",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Create a fraction from mixed-number parts (`whole num/den`).
    ///
    /// The sign is carried on `whole`; `num` must be non-negative when
    /// `whole` is non-zero.
    pub fn from_mixed(whole: i64, numerator: i64, denominator: i64) -> CalcResult<Self> {
        if denominator == 0 {
            return Err(CalcError::domain_error(
                "mixed number construction",
                "Denominator must be non-zero",
            ));
        }
        if whole != 0 && numerator < 0 {
            return Err(CalcError::invalid_input(
                "numerator",
                numerator.to_string(),
                "Fractional part of a mixed number carries no sign of its own",
            ));
        }
        Ok(MixedNumber {
            whole,
            numerator,
            denominator,
        }
        .to_improper())
    }

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// `simplify` is idempotent: simplifying a simplified fraction returns
    /// it unchanged.
    pub fn simplify(self) -> Self {
        let g = gcd(self.numerator, self.denominator);
        let sign = if self.denominator < 0 { -1 } else { 1 };
        Self {
            numerator: sign * self.numerator / g,
            denominator: sign * self.denominator / g,
        }
    }

    /// Convert to mixed form. The sign lands on `whole` (or stays on the
    /// numerator when the whole part is zero).
    pub fn to_mixed(self) -> MixedNumber {
        let f = self.simplify();
        let whole = f.numerator / f.denominator;
        let numerator = if whole == 0 {
            f.numerator
        } else {
            (f.numerator % f.denominator).abs()
        };
        MixedNumber {
            whole,
            numerator,
            denominator: f.denominator,
        }
    }

    /// An improper fraction has `|numerator| >= denominator`.
    pub fn is_improper(&self) -> bool {
        self.numerator.abs() >= self.denominator.abs()
    }

    /// Floating-point value of the fraction.
    pub fn as_decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Mixed-number form of an improper fraction (`2 1/3`).
///
/// Derived from a [`Fraction`] via [`Fraction::to_mixed`]; the sign is on
/// `whole`, and the fractional numerator is non-negative unless the whole
/// part is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    pub whole: i64,
    pub numerator: i64,
    pub denominator: i64,
}

impl MixedNumber {
    /// Convert back to an improper fraction.
    pub fn to_improper(self) -> Fraction {
        let numerator = if self.whole < 0 {
            self.whole * self.denominator - self.numerator
        } else {
            self.whole * self.denominator + self.numerator
        };
        Fraction {
            numerator,
            denominator: self.denominator,
        }
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole == 0 {
            write!(f, "{}/{}", self.numerator, self.denominator)
        } else if self.numerator == 0 {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{} {}/{}", self.whole, self.numerator, self.denominator)
        }
    }
}

/// The four fraction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Result of a fraction operation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": { "numerator": 5, "denominator": 6 },
///   "mixed": null,
///   "decimal": 0.8333333333333334,
///   "steps": [
///     "Common denominator: lcm(2, 3) = 6",
///     "Scale numerators: 1/2 = 3/6, 1/3 = 2/6",
///     "Add scaled numerators: 3 + 2 = 5",
///     "Sum: 5/6"
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionResult {
    /// The simplified result
    pub value: Fraction,

    /// Mixed-number form, present when the result has a whole part
    pub mixed: Option<MixedNumber>,

    /// Floating-point value for display alongside the exact form
    pub decimal: f64,

    /// Worked derivation, in order
    pub steps: Vec<String>,
}

fn ensure_valid(f: Fraction, field: &str) -> CalcResult<()> {
    if f.denominator == 0 {
        return Err(CalcError::domain_error(
            format!("{field} fraction"),
            "Denominator must be non-zero",
        ));
    }
    Ok(())
}

/// Package a raw (unreduced) result: simplify, derive the mixed form, and
/// append the simplification step when it changed anything.
fn finish(raw: Fraction, mut steps: Vec<String>) -> FractionResult {
    let value = raw.simplify();
    let g = gcd(raw.numerator, raw.denominator);
    if g > 1 {
        steps.push(format!("Simplify by gcd {}: {} = {}", g, raw, value));
    } else if raw.denominator < 0 {
        steps.push(format!("Normalize sign: {} = {}", raw, value));
    }

    let m = value.to_mixed();
    let mixed = if m.whole != 0 && m.numerator != 0 {
        steps.push(format!("Mixed form: {} = {}", value, m));
        Some(m)
    } else {
        None
    };

    FractionResult {
        value,
        mixed,
        decimal: value.as_decimal(),
        steps,
    }
}

fn add_or_subtract(a: Fraction, b: Fraction, subtract: bool) -> CalcResult<FractionResult> {
    ensure_valid(a, "first")?;
    ensure_valid(b, "second")?;

    let common = lcm(a.denominator, b.denominator);
    let scaled_a = a.numerator * (common / a.denominator);
    let scaled_b = b.numerator * (common / b.denominator);

    let mut steps = vec![
        format!(
            "Common denominator: lcm({}, {}) = {}",
            a.denominator, b.denominator, common
        ),
        format!(
            "Scale numerators: {} = {}/{}, {} = {}/{}",
            a, scaled_a, common, b, scaled_b, common
        ),
    ];

    let (numerator, word) = if subtract {
        steps.push(format!(
            "Subtract scaled numerators: {} - {} = {}",
            scaled_a,
            scaled_b,
            scaled_a - scaled_b
        ));
        (scaled_a - scaled_b, "Difference")
    } else {
        steps.push(format!(
            "Add scaled numerators: {} + {} = {}",
            scaled_a,
            scaled_b,
            scaled_a + scaled_b
        ));
        (scaled_a + scaled_b, "Sum")
    };

    let raw = Fraction {
        numerator,
        denominator: common,
    };
    steps.push(format!("{}: {}", word, raw));
    Ok(finish(raw, steps))
}

/// Add two fractions over their least common denominator.
pub fn add(a: Fraction, b: Fraction) -> CalcResult<FractionResult> {
    add_or_subtract(a, b, false)
}

/// Subtract `b` from `a` over their least common denominator.
pub fn subtract(a: Fraction, b: Fraction) -> CalcResult<FractionResult> {
    add_or_subtract(a, b, true)
}

/// Multiply two fractions (numerator by numerator, denominator by
/// denominator - no common-denominator step).
pub fn multiply(a: Fraction, b: Fraction) -> CalcResult<FractionResult> {
    ensure_valid(a, "first")?;
    ensure_valid(b, "second")?;

    let numerator = a.numerator * b.numerator;
    let denominator = a.denominator * b.denominator;
    let raw = Fraction {
        numerator,
        denominator,
    };

    let steps = vec![
        format!(
            "Multiply numerators: {} × {} = {}",
            a.numerator, b.numerator, numerator
        ),
        format!(
            "Multiply denominators: {} × {} = {}",
            a.denominator, b.denominator, denominator
        ),
        format!("Product: {}", raw),
    ];
    Ok(finish(raw, steps))
}

/// Divide `a` by `b` by multiplying with the reciprocal of `b`.
pub fn divide(a: Fraction, b: Fraction) -> CalcResult<FractionResult> {
    ensure_valid(a, "first")?;
    ensure_valid(b, "second")?;
    if b.numerator == 0 {
        return Err(CalcError::division_by_zero("fraction division"));
    }

    let reciprocal = Fraction {
        numerator: b.denominator,
        denominator: b.numerator,
    };
    let numerator = a.numerator * reciprocal.numerator;
    let denominator = a.denominator * reciprocal.denominator;
    let raw = Fraction {
        numerator,
        denominator,
    };

    let steps = vec![
        format!("Reciprocal of divisor: {} → {}", b, reciprocal),
        format!("Multiply by the reciprocal: {} × {}", a, reciprocal),
        format!(
            "Multiply numerators: {} × {} = {}",
            a.numerator, reciprocal.numerator, numerator
        ),
        format!(
            "Multiply denominators: {} × {} = {}",
            a.denominator, reciprocal.denominator, denominator
        ),
        format!("Quotient: {}", raw),
    ];
    Ok(finish(raw, steps))
}

/// Run one of the four operations.
pub fn calculate(a: Fraction, b: Fraction, op: FractionOp) -> CalcResult<FractionResult> {
    match op {
        FractionOp::Add => add(a, b),
        FractionOp::Subtract => subtract(a, b),
        FractionOp::Multiply => multiply(a, b),
        FractionOp::Divide => divide(a, b),
    }
}

/// Numeric ordering of two fractions.
///
/// Scales both numerators onto a common denominator and compares the
/// scaled integers in wide arithmetic - never through floating point, so
/// large numerators compare exactly.
pub fn compare(a: Fraction, b: Fraction) -> Ordering {
    let (an, ad) = if a.denominator < 0 {
        (-a.numerator, -a.denominator)
    } else {
        (a.numerator, a.denominator)
    };
    let (bn, bd) = if b.denominator < 0 {
        (-b.numerator, -b.denominator)
    } else {
        (b.numerator, b.denominator)
    };
    (an as i128 * bd as i128).cmp(&(bn as i128 * ad as i128))
}
