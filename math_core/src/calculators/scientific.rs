//! # Scientific-Notation Arithmetic
//!
//! Conversions between decimal and `mantissa × 10^exponent` form, and the
//! four operations on scientific-notation pairs with the mantissa/exponent
//! derivation shown step by step. Results are re-normalized to scientific
//! and engineering notation.

use serde::{Deserialize, Serialize};

use crate::calculators::decimal::{
    to_engineering, to_scientific, EngineeringNotation, ScientificNotation,
};
use crate::errors::{CalcError, CalcResult};
use crate::format::{to_exponential, FormatOptions};

/// A number as entered in scientific notation: `mantissa × 10^exponent`.
/// Not necessarily normalized - that happens on output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SciNumber {
    pub mantissa: f64,
    pub exponent: i32,
}

impl SciNumber {
    /// Decimal value of the pair.
    pub fn value(&self) -> f64 {
        self.mantissa * 10f64.powi(self.exponent)
    }
}

/// The four scientific-notation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SciOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// All representations of one converted value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SciConversion {
    pub decimal: f64,
    pub scientific: ScientificNotation,
    pub engineering: EngineeringNotation,
    pub e_notation: String,
    pub steps: Vec<String>,
}

/// Convert a decimal value to every notation form.
pub fn convert(value: f64, options: FormatOptions) -> CalcResult<SciConversion> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            value.to_string(),
            "Expected a finite number",
        ));
    }

    let scientific = to_scientific(value, options.precision)?;
    let engineering = to_engineering(value, options.precision)?;
    let e_notation = to_exponential(value, options.precision);

    let steps = vec![
        "Step 1: Convert Decimal to Scientific Notation".to_string(),
        format!("   Given: {}", value),
        "Step 2: Find the exponent".to_string(),
        "   Move the decimal point to get a mantissa between 1 and 10".to_string(),
        format!("   Mantissa: {}", scientific.mantissa),
        format!("   Exponent: {}", scientific.exponent),
        "Step 3: Express in Scientific Notation".to_string(),
        format!("   {}", scientific.formatted),
        "Step 4: Engineering Notation (exponents are multiples of 3)".to_string(),
        format!("   {}", engineering.formatted),
        "Step 5: E-Notation (computer format)".to_string(),
        format!("   {}", e_notation),
    ];

    Ok(SciConversion {
        decimal: value,
        scientific,
        engineering,
        e_notation,
        steps,
    })
}

/// Result of an operation on two scientific-notation numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SciOpResult {
    pub value: f64,
    pub scientific: ScientificNotation,
    pub engineering: EngineeringNotation,
    pub e_notation: String,
    pub steps: Vec<String>,
}

/// Apply one operation to two scientific-notation numbers.
///
/// Multiplication and division work on the mantissa/exponent pairs
/// directly (multiply mantissas, add exponents; divide mantissas,
/// subtract exponents); addition and subtraction combine mantissas when
/// the exponents already match and fall back to decimal arithmetic
/// otherwise. The result is re-normalized either way.
pub fn calculate(
    a: SciNumber,
    b: SciNumber,
    op: SciOp,
    options: FormatOptions,
) -> CalcResult<SciOpResult> {
    let num1 = a.value();
    let num2 = b.value();
    if !num1.is_finite() {
        return Err(CalcError::invalid_input(
            "a",
            format!("{} × 10^{}", a.mantissa, a.exponent),
            "Value is not finite",
        ));
    }
    if !num2.is_finite() {
        return Err(CalcError::invalid_input(
            "b",
            format!("{} × 10^{}", b.mantissa, b.exponent),
            "Value is not finite",
        ));
    }

    let mut steps = vec![
        "Step 1: Given values in Scientific Notation".to_string(),
        format!("   Number 1: {} × 10^{}", a.mantissa, a.exponent),
        format!("   Number 2: {} × 10^{}", b.mantissa, b.exponent),
    ];

    let value = match op {
        SciOp::Add => {
            steps.push("Step 2: Addition in Scientific Notation".to_string());
            if a.exponent == b.exponent {
                steps.push(format!("   Both have exponent {}", a.exponent));
                steps.push(format!(
                    "   ({} + {}) × 10^{}",
                    a.mantissa, b.mantissa, a.exponent
                ));
            } else {
                steps.push("   Exponents differ: convert to decimal, add, convert back".to_string());
                steps.push(format!("   {} + {}", num1, num2));
            }
            num1 + num2
        }
        SciOp::Subtract => {
            steps.push("Step 2: Subtraction in Scientific Notation".to_string());
            if a.exponent == b.exponent {
                steps.push(format!("   Both have exponent {}", a.exponent));
                steps.push(format!(
                    "   ({} - {}) × 10^{}",
                    a.mantissa, b.mantissa, a.exponent
                ));
            } else {
                steps.push(
                    "   Exponents differ: convert to decimal, subtract, convert back".to_string(),
                );
                steps.push(format!("   {} - {}", num1, num2));
            }
            num1 - num2
        }
        SciOp::Multiply => {
            steps.push("Step 2: Multiplication in Scientific Notation".to_string());
            steps.push("   Multiply mantissas and add exponents:".to_string());
            steps.push(format!(
                "   ({} × {}) × 10^({} + {})",
                a.mantissa, b.mantissa, a.exponent, b.exponent
            ));
            num1 * num2
        }
        SciOp::Divide => {
            if num2 == 0.0 {
                return Err(CalcError::division_by_zero("scientific-notation division"));
            }
            steps.push("Step 2: Division in Scientific Notation".to_string());
            steps.push("   Divide mantissas and subtract exponents:".to_string());
            steps.push(format!(
                "   ({} ÷ {}) × 10^({} - {})",
                a.mantissa, b.mantissa, a.exponent, b.exponent
            ));
            num1 / num2
        }
    };

    if !value.is_finite() {
        return Err(CalcError::overflow("scientific-notation arithmetic"));
    }
    steps.push(format!("   = {}", value));

    let scientific = to_scientific(value, options.precision)?;
    let engineering = to_engineering(value, options.precision)?;
    let e_notation = to_exponential(value, options.precision);
    steps.push("Step 3: Normalized Scientific Notation".to_string());
    steps.push(format!("   {}", scientific.formatted));
    steps.push("Step 4: Engineering Notation".to_string());
    steps.push(format!("   {}", engineering.formatted));

    Ok(SciOpResult {
        value,
        scientific,
        engineering,
        e_notation,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> FormatOptions {
        FormatOptions { precision: 6 }
    }

    #[test]
    fn test_convert_speed_of_light() {
        let c = convert(299_792_458.0, opts()).unwrap();
        assert_eq!(c.scientific.mantissa, 2.997925);
        assert_eq!(c.scientific.exponent, 8);
        assert_eq!(c.engineering.exponent, 6);
        assert_eq!(c.e_notation, "2.997925e+8");
    }

    #[test]
    fn test_multiply_adds_exponents() {
        let result = calculate(
            SciNumber {
                mantissa: 2.0,
                exponent: 3,
            },
            SciNumber {
                mantissa: 3.0,
                exponent: 4,
            },
            SciOp::Multiply,
            opts(),
        )
        .unwrap();
        assert_eq!(result.value, 6.0e7);
        assert_eq!(result.scientific.exponent, 7);
        assert!(result
            .steps
            .iter()
            .any(|s| s.contains("(2 × 3) × 10^(3 + 4)")));
    }

    #[test]
    fn test_add_same_exponent_combines_mantissas() {
        let result = calculate(
            SciNumber {
                mantissa: 1.5,
                exponent: 2,
            },
            SciNumber {
                mantissa: 2.5,
                exponent: 2,
            },
            SciOp::Add,
            opts(),
        )
        .unwrap();
        assert_eq!(result.value, 400.0);
        assert!(result.steps.iter().any(|s| s.contains("Both have exponent 2")));
    }

    #[test]
    fn test_add_mismatched_exponents_falls_back() {
        let result = calculate(
            SciNumber {
                mantissa: 1.0,
                exponent: 3,
            },
            SciNumber {
                mantissa: 5.0,
                exponent: 1,
            },
            SciOp::Add,
            opts(),
        )
        .unwrap();
        assert_eq!(result.value, 1050.0);
        assert_eq!(result.scientific.exponent, 3);
    }

    #[test]
    fn test_divide_by_zero_value() {
        let err = calculate(
            SciNumber {
                mantissa: 1.0,
                exponent: 2,
            },
            SciNumber {
                mantissa: 0.0,
                exponent: 5,
            },
            SciOp::Divide,
            opts(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_overflow_reported() {
        let err = calculate(
            SciNumber {
                mantissa: 9.0,
                exponent: 300,
            },
            SciNumber {
                mantissa: 9.0,
                exponent: 300,
            },
            SciOp::Multiply,
            opts(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }
}
