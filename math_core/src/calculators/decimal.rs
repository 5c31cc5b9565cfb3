//! # Decimal Conversion
//!
//! Decimal-to-fraction conversion via continued fractions, scientific and
//! engineering notation, percentage form, and the combined decimal
//! operation that emits every auxiliary representation alongside the
//! arithmetic result.

use serde::{Deserialize, Serialize};

use crate::calculators::fraction::Fraction;
use crate::errors::{CalcError, CalcResult};
use crate::format::{to_exponential, to_fixed};

/// Relative tolerance for accepting a continued-fraction convergent.
const TOLERANCE: f64 = 1.0e-10;

/// Iteration cap for the convergent loop. Floating-point noise can keep
/// the expansion from ever meeting the tolerance; the cap returns the best
/// convergent found instead of spinning.
const MAX_ITERATIONS: usize = 100;

/// Largest integer magnitude a convergent may reach while staying exactly
/// representable in an f64 (2^53).
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// A value expressed as `mantissa × 10^exponent` with mantissa in `[1, 10)`
/// (or 0 for zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScientificNotation {
    pub mantissa: f64,
    pub exponent: i32,
    /// Display form with Unicode superscript exponent, e.g. `2.997925 × 10⁸`
    pub formatted: String,
}

/// Scientific notation constrained to exponents that are multiples of 3,
/// aligning with SI magnitude prefixes. The mantissa may leave `[1, 10)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringNotation {
    pub mantissa: f64,
    pub exponent: i32,
    pub formatted: String,
}

/// Render a signed exponent with Unicode superscript digits: `⁸`, `⁻³`.
pub fn format_exponent(exponent: i32) -> String {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let mut formatted = String::new();
    if exponent < 0 {
        formatted.push('⁻');
    }
    for digit in exponent.unsigned_abs().to_string().bytes() {
        formatted.push(SUPERSCRIPTS[(digit - b'0') as usize]);
    }
    formatted
}

/// Convert a decimal to an exact fraction using continued-fraction
/// convergents.
///
/// Integers map directly to `n/1`. Other values run the standard
/// recurrence (`h = a·h₁ + h₂`, `k = a·k₁ + k₂`) until the convergent is
/// within `|x| · 1e-10` of the input, capped at 100 iterations.
///
/// # Example
///
/// ```rust
/// use math_core::calculators::decimal::decimal_to_fraction;
/// use math_core::calculators::fraction::Fraction;
///
/// assert_eq!(decimal_to_fraction(0.75).unwrap(), Fraction::new(3, 4).unwrap());
/// assert_eq!(decimal_to_fraction(4.0).unwrap(), Fraction::new(4, 1).unwrap());
/// ```
pub fn decimal_to_fraction(x: f64) -> CalcResult<Fraction> {
    if !x.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            x.to_string(),
            "Expected a finite number",
        ));
    }
    if x.abs() >= MAX_EXACT {
        return Err(CalcError::invalid_input(
            "value",
            x.to_string(),
            "Magnitude exceeds the exact integer range of a double",
        ));
    }
    if x == x.trunc() {
        return Fraction::new(x as i64, 1);
    }

    let (mut h1, mut h2) = (1.0_f64, 0.0_f64);
    let (mut k1, mut k2) = (0.0_f64, 1.0_f64);
    let mut b = x;

    for _ in 0..MAX_ITERATIONS {
        let a = b.floor();
        let h = a * h1 + h2;
        let k = a * k1 + k2;
        if !h.is_finite() || !k.is_finite() || h.abs() >= MAX_EXACT || k.abs() >= MAX_EXACT {
            // next convergent would lose integer exactness; keep the last
            break;
        }
        (h1, h2) = (h, h1);
        (k1, k2) = (k, k1);

        if (x - h1 / k1).abs() <= x.abs() * TOLERANCE {
            break;
        }
        let frac = b - a;
        if frac == 0.0 {
            break;
        }
        b = 1.0 / frac;
    }

    Ok(Fraction::new(h1 as i64, k1 as i64)?.simplify())
}

/// Normalize a value to scientific notation, rounding the mantissa to
/// `precision` fractional digits.
///
/// Zero is the special case `0 × 10⁰`.
pub fn to_scientific(x: f64, precision: usize) -> CalcResult<ScientificNotation> {
    if !x.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            x.to_string(),
            "Expected a finite number",
        ));
    }
    if x == 0.0 {
        return Ok(ScientificNotation {
            mantissa: 0.0,
            exponent: 0,
            formatted: format!("{} × 10⁰", to_fixed(0.0, precision)),
        });
    }

    let exponent = x.abs().log10().floor() as i32;
    let mantissa_raw = x / 10f64.powi(exponent);
    let rendered = to_fixed(mantissa_raw, precision);
    let mantissa = rendered.parse().unwrap_or(mantissa_raw);

    Ok(ScientificNotation {
        mantissa,
        exponent,
        formatted: format!("{} × 10{}", rendered, format_exponent(exponent)),
    })
}

/// Normalize to engineering notation: the exponent is floored to the
/// nearest lower multiple of 3 and the mantissa scaled to match.
pub fn to_engineering(x: f64, precision: usize) -> CalcResult<EngineeringNotation> {
    if !x.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            x.to_string(),
            "Expected a finite number",
        ));
    }
    if x == 0.0 {
        return Ok(EngineeringNotation {
            mantissa: 0.0,
            exponent: 0,
            formatted: format!("{} × 10⁰", to_fixed(0.0, precision)),
        });
    }

    let exponent = (x.abs().log10().floor() as i32).div_euclid(3) * 3;
    let mantissa_raw = x / 10f64.powi(exponent);
    let rendered = to_fixed(mantissa_raw, precision);
    let mantissa = rendered.parse().unwrap_or(mantissa_raw);

    Ok(EngineeringNotation {
        mantissa,
        exponent,
        formatted: format!("{} × 10{}", rendered, format_exponent(exponent)),
    })
}

/// Percentage form of a decimal: `x · 100`, fixed to `precision - 2`
/// decimal places. Requires `precision >= 2`.
pub fn percentage_form(x: f64, precision: usize) -> CalcResult<String> {
    if precision < 2 {
        return Err(CalcError::invalid_input(
            "precision",
            precision.to_string(),
            "Percentage form requires a precision of at least 2",
        ));
    }
    Ok(to_fixed(x * 100.0, precision - 2))
}

/// The four decimal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl DecimalOp {
    fn symbol(self) -> &'static str {
        match self {
            DecimalOp::Add => "+",
            DecimalOp::Subtract => "-",
            DecimalOp::Multiply => "×",
            DecimalOp::Divide => "÷",
        }
    }

    fn word(self) -> &'static str {
        match self {
            DecimalOp::Add => "Addition",
            DecimalOp::Subtract => "Subtraction",
            DecimalOp::Multiply => "Multiplication",
            DecimalOp::Divide => "Division",
        }
    }
}

/// Input for the combined decimal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecimalInput {
    pub a: f64,
    pub b: f64,
    pub op: DecimalOp,
    /// Decimal places for the rounded result; must be at least 2 so the
    /// percentage form stays well-defined
    pub precision: usize,
}

/// Result of the combined decimal operation: the rounded value plus every
/// auxiliary representation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "value": 3.75,
///   "fraction": { "numerator": 15, "denominator": 4 },
///   "scientific": { "mantissa": 3.75, "exponent": 0, "formatted": "3.7500000000 × 10⁰" },
///   "e_notation": "3.7500000000e+0",
///   "percentage": "375.00000000",
///   "steps": ["Step 1: Given values", "..."]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecimalResult {
    pub value: f64,
    pub fraction: Fraction,
    pub scientific: ScientificNotation,
    pub e_notation: String,
    pub percentage: String,
    pub steps: Vec<String>,
}

/// Perform one decimal operation and derive all auxiliary forms.
pub fn calculate(input: &DecimalInput) -> CalcResult<DecimalResult> {
    if !input.a.is_finite() {
        return Err(CalcError::invalid_input(
            "a",
            input.a.to_string(),
            "Expected a finite number",
        ));
    }
    if !input.b.is_finite() {
        return Err(CalcError::invalid_input(
            "b",
            input.b.to_string(),
            "Expected a finite number",
        ));
    }
    if input.precision < 2 {
        return Err(CalcError::invalid_input(
            "precision",
            input.precision.to_string(),
            "Precision must be at least 2",
        ));
    }

    let mut steps = vec![
        "Step 1: Given values".to_string(),
        format!("   First decimal: {}", input.a),
        format!("   Second decimal: {}", input.b),
        format!("   Precision: {} decimal places", input.precision),
    ];

    if input.op == DecimalOp::Divide && input.b == 0.0 {
        return Err(CalcError::division_by_zero("decimal division"));
    }

    let raw = match input.op {
        DecimalOp::Add => input.a + input.b,
        DecimalOp::Subtract => input.a - input.b,
        DecimalOp::Multiply => input.a * input.b,
        DecimalOp::Divide => input.a / input.b,
    };
    if !raw.is_finite() {
        return Err(CalcError::overflow(format!(
            "decimal {}",
            input.op.word().to_lowercase()
        )));
    }

    steps.push(format!("Step 2: Perform {}", input.op.word()));
    steps.push(format!("   {} {} {}", input.a, input.op.symbol(), input.b));
    steps.push(format!("   = {}", raw));

    let rendered = to_fixed(raw, input.precision);
    let value: f64 = rendered.parse().unwrap_or(raw);
    steps.push(format!(
        "Step 3: Round to {} decimal places",
        input.precision
    ));
    steps.push(format!("   {} → {}", raw, value));

    let fraction = decimal_to_fraction(value)?;
    steps.push("Step 4: Convert to Fraction".to_string());
    steps.push(format!("   Decimal: {}", value));
    steps.push(format!("   Fraction: {}", fraction));

    let scientific = to_scientific(value, input.precision)?;
    let e_notation = to_exponential(value, input.precision);
    steps.push("Step 5: Scientific Notation".to_string());
    steps.push(format!("   {}", e_notation));

    let percentage = percentage_form(value, input.precision)?;
    steps.push("Step 6: Percentage Form".to_string());
    steps.push(format!("   {}%", percentage));

    Ok(DecimalResult {
        value,
        fraction,
        scientific,
        e_notation,
        percentage,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_maps_to_over_one() {
        assert_eq!(decimal_to_fraction(4.0).unwrap(), Fraction::new(4, 1).unwrap());
        assert_eq!(decimal_to_fraction(0.0).unwrap(), Fraction::new(0, 1).unwrap());
        assert_eq!(
            decimal_to_fraction(-12.0).unwrap(),
            Fraction::new(-12, 1).unwrap()
        );
    }

    #[test]
    fn test_terminating_decimals() {
        assert_eq!(decimal_to_fraction(0.75).unwrap(), Fraction::new(3, 4).unwrap());
        assert_eq!(decimal_to_fraction(-0.5).unwrap(), Fraction::new(-1, 2).unwrap());
        assert_eq!(decimal_to_fraction(2.25).unwrap(), Fraction::new(9, 4).unwrap());
    }

    #[test]
    fn test_repeating_decimal_recovers_ratio() {
        let third = decimal_to_fraction(1.0 / 3.0).unwrap();
        assert_eq!(third, Fraction::new(1, 3).unwrap());

        let sevenths = decimal_to_fraction(22.0 / 7.0).unwrap();
        assert_eq!(sevenths, Fraction::new(22, 7).unwrap());
    }

    #[test]
    fn test_irrational_stays_bounded() {
        // never meets the tolerance exactly; the cap keeps it terminating
        let approx = decimal_to_fraction(std::f64::consts::PI).unwrap();
        let err = (approx.as_decimal() - std::f64::consts::PI).abs();
        assert!(err <= std::f64::consts::PI * TOLERANCE);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(decimal_to_fraction(f64::NAN).is_err());
        assert!(decimal_to_fraction(f64::INFINITY).is_err());
    }

    #[test]
    fn test_beyond_exact_integer_range_rejected() {
        assert!(decimal_to_fraction(1.0e20).is_err());
        assert!(decimal_to_fraction(-1.0e20).is_err());
    }

    #[test]
    fn test_scientific_notation_speed_of_light() {
        let sci = to_scientific(299_792_458.0, 6).unwrap();
        assert_eq!(sci.exponent, 8);
        assert_eq!(sci.mantissa, 2.997925);
        assert_eq!(sci.formatted, "2.997925 × 10⁸");
    }

    #[test]
    fn test_scientific_notation_zero_and_small() {
        let zero = to_scientific(0.0, 6).unwrap();
        assert_eq!((zero.mantissa, zero.exponent), (0.0, 0));

        let small = to_scientific(0.00123, 3).unwrap();
        assert_eq!(small.exponent, -3);
        assert_eq!(small.mantissa, 1.23);
        assert_eq!(small.formatted, "1.230 × 10⁻³");
    }

    #[test]
    fn test_engineering_exponent_is_multiple_of_three() {
        let eng = to_engineering(299_792_458.0, 6).unwrap();
        assert_eq!(eng.exponent, 6);
        assert_eq!(eng.mantissa, 299.792458);

        let small = to_engineering(0.00123, 2).unwrap();
        assert_eq!(small.exponent, -3);
        assert_eq!(small.mantissa, 1.23);

        for x in [1.0, 12.0, 123.0, 0.5, 0.05] {
            assert_eq!(to_engineering(x, 4).unwrap().exponent.rem_euclid(3), 0);
        }
    }

    #[test]
    fn test_format_exponent_superscripts() {
        assert_eq!(format_exponent(8), "⁸");
        assert_eq!(format_exponent(-3), "⁻³");
        assert_eq!(format_exponent(0), "⁰");
        assert_eq!(format_exponent(23), "²³");
    }

    #[test]
    fn test_percentage_form() {
        assert_eq!(percentage_form(0.375, 4).unwrap(), "37.50");
        assert!(percentage_form(0.5, 1).is_err());
    }

    #[test]
    fn test_combined_operation() {
        let result = calculate(&DecimalInput {
            a: 1.5,
            b: 2.25,
            op: DecimalOp::Add,
            precision: 10,
        })
        .unwrap();

        assert_eq!(result.value, 3.75);
        assert_eq!(result.fraction, Fraction::new(15, 4).unwrap());
        assert_eq!(result.percentage, "375.00000000");
        assert!(result.steps.iter().any(|s| s.contains("Perform Addition")));
        assert!(result.steps.iter().any(|s| s.contains("Convert to Fraction")));
    }

    #[test]
    fn test_combined_divide_by_zero() {
        let err = calculate(&DecimalInput {
            a: 1.0,
            b: 0.0,
            op: DecimalOp::Divide,
            precision: 4,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_combined_overflow() {
        let err = calculate(&DecimalInput {
            a: f64::MAX,
            b: f64::MAX,
            op: DecimalOp::Multiply,
            precision: 2,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&DecimalInput {
            a: 0.5,
            b: 0.25,
            op: DecimalOp::Multiply,
            precision: 4,
        })
        .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: DecimalResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.value, result.value);
        assert_eq!(roundtrip.fraction, result.fraction);
    }
}
