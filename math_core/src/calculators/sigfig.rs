//! # Significant Figures
//!
//! Digit classification, counting, rounding to N significant figures, and
//! the propagation rules for two-operand arithmetic.
//!
//! Counting works on the **original decimal string**, never a parsed
//! float: trailing- and leading-zero information is lost the moment the
//! text becomes a number, and that information decides significance.
//!
//! ## Classification rules
//!
//! Applied left to right over the cleaned digit string (sign stripped,
//! decimal-point presence tracked separately):
//!
//! 1. Non-zero digits are always significant.
//! 2. Zeros before the first non-zero digit are not significant.
//! 3. Zeros after the first non-zero digit are significant when the number
//!    has a decimal point, or when they sit between non-zero digits.
//! 4. The trailing zero run of a number with no decimal point is
//!    ambiguous and excluded from the count ("1500" has 2 significant
//!    figures); the ambiguity is reported, not guessed away.
//! 5. Scientific-notation input is classified on the mantissa only; the
//!    exponent carries no significance information.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{to_exponential, to_fixed, to_precision};
use crate::primitives::parse_number;

/// Significance class of a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitClass {
    Significant,
    NotSignificant,
    Ambiguous,
}

/// One digit of the input with its classification, in input order.
/// Drives per-digit highlighting in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedDigit {
    pub digit: char,
    pub class: DigitClass,
    pub note: String,
}

/// Full significance analysis of one numeric string.
///
/// ## JSON Example
///
/// ```json
/// {
///   "count": 2,
///   "digits": [
///     { "digit": "1", "class": "significant", "note": "Non-zero digit" },
///     { "digit": "5", "class": "significant", "note": "Non-zero digit" },
///     { "digit": "0", "class": "ambiguous", "note": "Trailing zero without a decimal point" },
///     { "digit": "0", "class": "ambiguous", "note": "Trailing zero without a decimal point" }
///   ],
///   "rules": [
///     "All non-zero digits are significant",
///     "Trailing zeros without a decimal point are ambiguous"
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigFigAnalysis {
    /// Number of significant figures (ambiguous digits excluded)
    pub count: usize,

    /// Per-digit classification in input order (decimal point omitted)
    pub digits: Vec<ClassifiedDigit>,

    /// The classification rules that fired, deduplicated, in first-use order
    pub rules: Vec<String>,
}

fn push_rule(rules: &mut Vec<String>, rule: &str) {
    if !rules.iter().any(|r| r == rule) {
        rules.push(rule.to_string());
    }
}

/// Count significant figures and classify every digit of `input`.
pub fn count_sig_figs(input: &str) -> CalcResult<SigFigAnalysis> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(
            "number",
            input,
            "Expected a number",
        ));
    }

    // Scientific notation: only the mantissa carries significance.
    if let Some(pos) = trimmed.find(['e', 'E']) {
        if pos == 0 {
            return Err(CalcError::invalid_input(
                "number",
                input,
                "Expected a mantissa before the exponent marker",
            ));
        }
        return count_sig_figs(&trimmed[..pos]);
    }

    let replaced = trimmed.replace([',', ' '], "");
    let cleaned = replaced.strip_prefix(['-', '+']).unwrap_or(&replaced);

    if cleaned.is_empty()
        || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.')
        || cleaned.matches('.').count() > 1
        || !cleaned.chars().any(|c| c.is_ascii_digit())
    {
        return Err(CalcError::invalid_input(
            "number",
            input,
            "Expected a decimal number",
        ));
    }

    let has_decimal = cleaned.contains('.');
    let chars: Vec<char> = cleaned.chars().collect();
    let last_nonzero = chars
        .iter()
        .rposition(|c| c.is_ascii_digit() && *c != '0');

    let mut count = 0;
    let mut digits = Vec::new();
    let mut rules = Vec::new();
    let mut found_nonzero = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == '.' {
            continue;
        }

        if c != '0' {
            found_nonzero = true;
            count += 1;
            digits.push(ClassifiedDigit {
                digit: c,
                class: DigitClass::Significant,
                note: "Non-zero digit".to_string(),
            });
            push_rule(&mut rules, "All non-zero digits are significant");
        } else if !found_nonzero {
            digits.push(ClassifiedDigit {
                digit: c,
                class: DigitClass::NotSignificant,
                note: "Leading zero".to_string(),
            });
            push_rule(&mut rules, "Leading zeros are never significant");
        } else if has_decimal {
            count += 1;
            digits.push(ClassifiedDigit {
                digit: c,
                class: DigitClass::Significant,
                note: "Zero after the decimal point".to_string(),
            });
            push_rule(&mut rules, "Trailing zeros after a decimal point are significant");
        } else if last_nonzero.is_some_and(|last| i < last) {
            count += 1;
            digits.push(ClassifiedDigit {
                digit: c,
                class: DigitClass::Significant,
                note: "Captive zero between non-zero digits".to_string(),
            });
            push_rule(&mut rules, "Zeros between non-zero digits are significant");
        } else {
            digits.push(ClassifiedDigit {
                digit: c,
                class: DigitClass::Ambiguous,
                note: "Trailing zero without a decimal point".to_string(),
            });
            push_rule(
                &mut rules,
                "Trailing zeros without a decimal point are ambiguous",
            );
        }
    }

    Ok(SigFigAnalysis {
        count,
        digits,
        rules,
    })
}

/// Decimal places of a numeric string: the length of its fractional part,
/// 0 when there is none. Scientific-notation input is measured on the
/// mantissa.
pub fn decimal_places(input: &str) -> usize {
    let trimmed = input.trim();
    let mantissa = match trimmed.find(['e', 'E']) {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };
    match mantissa.find('.') {
        Some(pos) => mantissa.len() - pos - 1,
        None => 0,
    }
}

/// A value rounded to a fixed number of significant figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundedValue {
    pub value: f64,
    pub formatted: String,
    pub steps: Vec<String>,
}

/// Round `x` to `sig_figs` significant figures.
///
/// Scales the value so the kept digits sit left of the decimal point,
/// rounds with [`f64::round`] (ties away from zero - this is the engine's
/// documented tie-break for this operation), and scales back. The result
/// is formatted in scientific notation when the magnitude exceeds 10^6 or
/// falls below 10^-6, and with `sig_figs` significant digits otherwise.
pub fn round_to_sig_figs(x: f64, sig_figs: usize) -> CalcResult<RoundedValue> {
    if !x.is_finite() {
        return Err(CalcError::invalid_input(
            "value",
            x.to_string(),
            "Expected a finite number",
        ));
    }
    if sig_figs == 0 {
        return Err(CalcError::invalid_input(
            "sig_figs",
            "0",
            "At least one significant figure is required",
        ));
    }

    let mut steps = vec![format!("Step 1: Original number: {}", x)];

    if x == 0.0 {
        steps.push("Step 2: Number is zero, result is 0".to_string());
        return Ok(RoundedValue {
            value: 0.0,
            formatted: "0".to_string(),
            steps,
        });
    }

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let abs = x.abs();

    let magnitude = abs.log10().floor() as i32;
    steps.push("Step 2: Determine the order of magnitude".to_string());
    steps.push(format!("   Magnitude (exponent): 10^{}", magnitude));

    let scale = 10f64.powi(magnitude - sig_figs as i32 + 1);
    let scaled = abs / scale;
    steps.push(format!(
        "Step 3: Scale to keep {} significant figures",
        sig_figs
    ));
    steps.push(format!("   Scaled value: {}", scaled));

    let rounded = scaled.round();
    steps.push("Step 4: Round to the nearest integer".to_string());
    steps.push(format!("   Rounded: {}", rounded));

    let value = sign * rounded * scale;
    steps.push("Step 5: Scale back".to_string());
    steps.push(format!("   Result: {}", value));

    let formatted = if magnitude.abs() > 6 {
        let f = to_exponential(value, sig_figs - 1);
        steps.push(format!("Step 6: Express in scientific notation: {}", f));
        f
    } else {
        let f = to_precision(value, sig_figs);
        steps.push(format!(
            "Step 6: Express with {} significant figures: {}",
            sig_figs, f
        ));
        f
    };

    Ok(RoundedValue {
        value,
        formatted,
        steps,
    })
}

/// The four operations covered by the propagation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigFigOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A two-operand calculation carried out under significant-figure rules.
/// Operands stay strings so their significance survives parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigFigOpInput {
    pub a: String,
    pub b: String,
    pub op: SigFigOp,
}

/// Result of a propagation calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigFigOpResult {
    /// Full-precision arithmetic result before rounding
    pub raw: f64,

    /// Result rounded per the applicable propagation rule
    pub formatted: String,

    /// Figures kept: significant figures for ×/÷, decimal places for +/−
    pub kept: usize,

    pub a_sig_figs: usize,
    pub b_sig_figs: usize,

    pub steps: Vec<String>,
}

/// Apply the propagation rules: ×/÷ keep the minimum significant-figure
/// count, +/− keep the minimum decimal-place count. The raw result is
/// computed at full precision first, then rounded.
pub fn calculate(input: &SigFigOpInput) -> CalcResult<SigFigOpResult> {
    let a = parse_number("a", &input.a)?;
    let b = parse_number("b", &input.b)?;
    let analysis_a = count_sig_figs(&input.a)?;
    let analysis_b = count_sig_figs(&input.b)?;

    let mut steps = vec![
        "Step 1: Count significant figures in each number".to_string(),
        format!("   {} has {} sig figs", input.a.trim(), analysis_a.count),
        format!("   {} has {} sig figs", input.b.trim(), analysis_b.count),
    ];

    match input.op {
        SigFigOp::Multiply | SigFigOp::Divide => {
            if input.op == SigFigOp::Divide && b == 0.0 {
                return Err(CalcError::division_by_zero("significant-figure division"));
            }

            let kept = analysis_a.count.min(analysis_b.count);
            steps.push("Step 2: For multiplication/division the result keeps the minimum significant-figure count".to_string());
            steps.push(format!("   Result should have {} sig figs", kept));
            if kept == 0 {
                return Err(CalcError::invalid_input(
                    "operands",
                    format!("{}, {}", input.a.trim(), input.b.trim()),
                    "Each operand needs at least one significant figure",
                ));
            }

            let raw = if input.op == SigFigOp::Multiply {
                steps.push(format!("Step 3: Multiply: {} × {}", a, b));
                a * b
            } else {
                steps.push(format!("Step 3: Divide: {} ÷ {}", a, b));
                a / b
            };
            if !raw.is_finite() {
                return Err(CalcError::overflow("significant-figure calculation"));
            }
            steps.push(format!("   = {}", raw));

            let rounded = round_to_sig_figs(raw, kept)?;
            steps.push(format!(
                "Step 4: Round to {} significant figures: {}",
                kept, rounded.formatted
            ));

            Ok(SigFigOpResult {
                raw,
                formatted: rounded.formatted,
                kept,
                a_sig_figs: analysis_a.count,
                b_sig_figs: analysis_b.count,
                steps,
            })
        }
        SigFigOp::Add | SigFigOp::Subtract => {
            let dp_a = decimal_places(&input.a);
            let dp_b = decimal_places(&input.b);
            let kept = dp_a.min(dp_b);
            steps.push("Step 2: For addition/subtraction the result keeps the minimum decimal-place count".to_string());
            steps.push(format!("   {} has {} decimal places", input.a.trim(), dp_a));
            steps.push(format!("   {} has {} decimal places", input.b.trim(), dp_b));
            steps.push(format!("   Result should have {} decimal places", kept));

            let raw = if input.op == SigFigOp::Add {
                steps.push(format!("Step 3: Add: {} + {}", a, b));
                a + b
            } else {
                steps.push(format!("Step 3: Subtract: {} - {}", a, b));
                a - b
            };
            if !raw.is_finite() {
                return Err(CalcError::overflow("significant-figure calculation"));
            }
            steps.push(format!("   = {}", raw));

            let formatted = to_fixed(raw, kept);
            steps.push(format!(
                "Step 4: Round to {} decimal places: {}",
                kept, formatted
            ));

            Ok(SigFigOpResult {
                raw,
                formatted,
                kept,
                a_sig_figs: analysis_a.count,
                b_sig_figs: analysis_b.count,
                steps,
            })
        }
    }
}
