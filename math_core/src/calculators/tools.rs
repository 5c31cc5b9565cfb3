//! # Everyday Arithmetic Tools
//!
//! The smaller catalog calculators: percentage modes, ratio
//! simplification, proportion solving, list statistics, roots, and the
//! step-emitting GCD/LCM wrappers. Each follows the same contract as the
//! larger engines: typed input in, value plus ordered derivation steps
//! out.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::to_fixed;
use crate::primitives::{gcd, lcm};

fn ensure_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Expected a finite number",
        ));
    }
    Ok(())
}

// ============================================================================
// Percentage
// ============================================================================

/// The three percentage questions the calculator answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageMode {
    /// What is X% of Y?
    PercentOf,
    /// X is what percent of Y?
    PartOfWhole,
    /// Percent change from X to Y
    Change,
}

/// Percentage result: the value rounded to two decimals (as displayed),
/// the formula applied, and the worked steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageResult {
    pub value: f64,
    pub formula: String,
    pub steps: Vec<String>,
}

/// Answer one of the percentage questions for `(x, y)`.
pub fn percentage(mode: PercentageMode, x: f64, y: f64) -> CalcResult<PercentageResult> {
    ensure_finite("x", x)?;
    ensure_finite("y", y)?;

    let (raw, formula, steps) = match mode {
        PercentageMode::PercentOf => {
            let decimal = x / 100.0;
            let raw = decimal * y;
            (
                raw,
                "(Percentage ÷ 100) × Value",
                vec![
                    format!("Convert percentage to decimal: {} ÷ 100 = {}", x, decimal),
                    format!("Multiply by the value: {} × {} = {}", decimal, y, raw),
                ],
            )
        }
        PercentageMode::PartOfWhole => {
            if y == 0.0 {
                return Err(CalcError::division_by_zero("percentage of whole"));
            }
            let share = x / y;
            let raw = share * 100.0;
            (
                raw,
                "(Part ÷ Whole) × 100",
                vec![
                    format!(
                        "Divide part by whole: {} ÷ {} = {}",
                        x,
                        y,
                        to_fixed(share, 4)
                    ),
                    format!("Multiply by 100: {} × 100 = {}%", to_fixed(share, 4), raw),
                ],
            )
        }
        PercentageMode::Change => {
            if x == 0.0 {
                return Err(CalcError::division_by_zero("percent change"));
            }
            let diff = y - x;
            let share = diff / x.abs();
            let raw = share * 100.0;
            (
                raw,
                "((New - Old) ÷ |Old|) × 100",
                vec![
                    format!("Find the difference: {} - {} = {}", y, x, diff),
                    format!(
                        "Divide by the original absolute value: {} ÷ |{}| = {}",
                        diff,
                        x,
                        to_fixed(share, 4)
                    ),
                    format!(
                        "Convert to percent: {} × 100 = {}%",
                        to_fixed(share, 4),
                        to_fixed(raw, 2)
                    ),
                ],
            )
        }
    };

    if !raw.is_finite() {
        return Err(CalcError::overflow("percentage calculation"));
    }
    let value: f64 = to_fixed(raw, 2).parse().unwrap_or(raw);

    Ok(PercentageResult {
        value,
        formula: formula.to_string(),
        steps,
    })
}

// ============================================================================
// Ratio
// ============================================================================

/// A ratio reduced to lowest terms plus both unit rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioResult {
    pub simplified_a: i64,
    pub simplified_b: i64,
    /// The common divisor both terms were divided by
    pub divisor: i64,
    /// Value of A for every 1 unit of B
    pub unit_rate_ab: f64,
    /// Value of B for every 1 unit of A
    pub unit_rate_ba: f64,
    pub steps: Vec<String>,
}

/// Simplify the ratio `a : b` and compute its unit rates.
pub fn ratio(a: i64, b: i64) -> CalcResult<RatioResult> {
    if a == 0 || b == 0 {
        return Err(CalcError::invalid_input(
            "ratio",
            format!("{a} : {b}"),
            "Both ratio terms must be non-zero",
        ));
    }

    let divisor = gcd(a, b);
    let simplified_a = a / divisor;
    let simplified_b = b / divisor;
    let unit_rate_ab = a as f64 / b as f64;
    let unit_rate_ba = b as f64 / a as f64;

    let steps = vec![
        format!(
            "Divide both terms by their greatest common divisor: gcd({}, {}) = {}",
            a, b, divisor
        ),
        format!("Simplified ratio: {} : {}", simplified_a, simplified_b),
        format!("Unit rate (A per B): {} : 1", to_fixed(unit_rate_ab, 4)),
        format!("Unit rate (B per A): 1 : {}", to_fixed(unit_rate_ba, 4)),
    ];

    Ok(RatioResult {
        simplified_a,
        simplified_b,
        divisor,
        unit_rate_ab,
        unit_rate_ba,
        steps,
    })
}

// ============================================================================
// Proportion
// ============================================================================

/// Solution of `a : b = c : x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProportionResult {
    pub value: f64,
    pub steps: Vec<String>,
}

/// Solve `a : b = c : x` for `x` by cross-multiplication.
pub fn proportion(a: f64, b: f64, c: f64) -> CalcResult<ProportionResult> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    ensure_finite("c", c)?;
    if a == 0.0 {
        return Err(CalcError::division_by_zero("proportion"));
    }

    let cross = b * c;
    let value = cross / a;
    if !value.is_finite() {
        return Err(CalcError::overflow("proportion"));
    }

    let steps = vec![
        format!("1. Write as fractions: {}/{} = {}/x", a, b, c),
        format!("2. Cross multiply: {} × x = {} × {}", a, b, c),
        format!("3. Simplify: {}x = {}", a, cross),
        format!("4. Divide by {}: x = {} ÷ {}", a, cross, a),
        format!("5. Result: x = {}", value),
    ];

    Ok(ProportionResult { value, steps })
}

// ============================================================================
// Average / statistics
// ============================================================================

/// Descriptive statistics over a list of numbers.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mean": 25.0,
///   "median": 25.0,
///   "modes": [],
///   "range": 30.0,
///   "sum": 100.0,
///   "count": 4,
///   "sorted": [10.0, 20.0, 30.0, 40.0],
///   "steps": ["Sum: 10 + 20 + 30 + 40 = 100", "Mean: 100 ÷ 4 = 25"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageResult {
    pub mean: f64,
    pub median: f64,
    /// Most frequent values; empty when every value appears once
    pub modes: Vec<f64>,
    pub range: f64,
    pub sum: f64,
    pub count: usize,
    pub sorted: Vec<f64>,
    pub steps: Vec<String>,
}

/// Mean, median, mode set, and range of a list.
pub fn average(values: &[f64]) -> CalcResult<AverageResult> {
    if values.is_empty() {
        return Err(CalcError::invalid_input(
            "values",
            "",
            "Expected at least one number",
        ));
    }
    for v in values {
        ensure_finite("values", *v)?;
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = count / 2;
    let median = if count % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };

    let range = sorted[count - 1] - sorted[0];

    // scan runs of equal values in the sorted list
    let mut modes = Vec::new();
    let mut max_freq = 0usize;
    let mut i = 0;
    while i < count {
        let mut j = i + 1;
        while j < count && sorted[j] == sorted[i] {
            j += 1;
        }
        let freq = j - i;
        if freq > max_freq {
            max_freq = freq;
            modes.clear();
            modes.push(sorted[i]);
        } else if freq == max_freq {
            modes.push(sorted[i]);
        }
        i = j;
    }
    if max_freq <= 1 {
        modes.clear();
    }

    let joined = sorted
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let steps = vec![
        format!("Sorted data: [{}]", joined),
        format!("Sum: {}", sum),
        format!("Mean: {} ÷ {} = {}", sum, count, mean),
        format!("Median (middle of sorted data): {}", median),
        if modes.is_empty() {
            "Mode: none (all values appear once)".to_string()
        } else {
            format!(
                "Mode: {}",
                modes
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
        format!(
            "Range: {} - {} = {}",
            sorted[count - 1],
            sorted[0],
            range
        ),
    ];

    Ok(AverageResult {
        mean,
        median,
        modes,
        range,
        sum,
        count,
        sorted,
        steps,
    })
}

// ============================================================================
// Roots
// ============================================================================

/// Which root to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    Square,
    Cube,
}

/// Root of a number with perfect-power detection and the nearest perfect
/// bounds for estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResult {
    pub value: f64,
    pub is_perfect: bool,
    pub floor_root: f64,
    pub ceil_root: f64,
    /// `floor_root` raised back to the power
    pub lower_perfect: f64,
    /// `ceil_root` raised back to the power
    pub upper_perfect: f64,
    pub steps: Vec<String>,
}

/// Square or cube root. The real square root of a negative number is a
/// domain error; cube roots of negatives are fine.
pub fn root(kind: RootKind, x: f64) -> CalcResult<RootResult> {
    ensure_finite("x", x)?;
    if kind == RootKind::Square && x < 0.0 {
        return Err(CalcError::domain_error(
            "square root",
            "Cannot take the real square root of a negative number",
        ));
    }

    let (value, symbol, power) = match kind {
        RootKind::Square => (x.sqrt(), "√", 2),
        RootKind::Cube => (x.cbrt(), "∛", 3),
    };
    let is_perfect = value.fract() == 0.0;

    let floor_root = value.floor();
    let ceil_root = value.ceil();
    let lower_perfect = floor_root.powi(power);
    let upper_perfect = ceil_root.powi(power);

    let mut steps = vec![format!("{}{} = {}", symbol, x, value)];
    if is_perfect {
        steps.push(format!(
            "{} is a perfect {}: {}^{} = {}",
            x,
            if power == 2 { "square" } else { "cube" },
            value,
            power,
            x
        ));
    } else {
        steps.push(format!(
            "Not a perfect {}; the root lies between {} and {}",
            if power == 2 { "square" } else { "cube" },
            floor_root,
            ceil_root
        ));
        steps.push(format!(
            "Nearest perfect bounds: {}^{} = {} and {}^{} = {}",
            floor_root, power, lower_perfect, ceil_root, power, upper_perfect
        ));
    }

    Ok(RootResult {
        value,
        is_perfect,
        floor_root,
        ceil_root,
        lower_perfect,
        upper_perfect,
        steps,
    })
}

// ============================================================================
// GCD / LCM with steps
// ============================================================================

/// Integer result with its derivation, shared by the GCD and LCM
/// calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntResult {
    pub value: i64,
    pub steps: Vec<String>,
}

/// Greatest common divisor with the derivation spelled out.
pub fn gcd_with_steps(a: i64, b: i64) -> CalcResult<IntResult> {
    let value = gcd(a, b);
    let steps = vec![
        format!("Finding the GCD of {} and {}", a, b),
        "Using the Euclidean algorithm".to_string(),
        format!("GCD = {}", value),
    ];
    Ok(IntResult { value, steps })
}

/// Least common multiple with the `|a·b| ÷ gcd` derivation. Zero operands
/// are reported directly rather than fed to the primitive.
pub fn lcm_with_steps(a: i64, b: i64) -> CalcResult<IntResult> {
    if a == 0 || b == 0 {
        return Ok(IntResult {
            value: 0,
            steps: vec!["LCM is 0 when any operand is 0".to_string()],
        });
    }

    let g = gcd(a, b);
    let value = lcm(a, b);
    let steps = vec![
        format!("GCD({}, {}) = {}", a, b, g),
        format!("LCM = |{} × {}| ÷ GCD", a, b),
        format!("LCM = {} ÷ {} = {}", (a * b).abs(), g, value),
    ];
    Ok(IntResult { value, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        let result = percentage(PercentageMode::PercentOf, 25.0, 80.0).unwrap();
        assert_eq!(result.value, 20.0);
        assert_eq!(result.formula, "(Percentage ÷ 100) × Value");
        assert_eq!(
            result.steps[0],
            "Convert percentage to decimal: 25 ÷ 100 = 0.25"
        );
    }

    #[test]
    fn test_part_of_whole() {
        let result = percentage(PercentageMode::PartOfWhole, 30.0, 120.0).unwrap();
        assert_eq!(result.value, 25.0);
        assert!(result.steps[0].contains("0.2500"));
    }

    #[test]
    fn test_percent_change() {
        let result = percentage(PercentageMode::Change, 50.0, 75.0).unwrap();
        assert_eq!(result.value, 50.0);
    }

    #[test]
    fn test_percentage_guards() {
        assert!(percentage(PercentageMode::PartOfWhole, 10.0, 0.0).is_err());
        assert!(percentage(PercentageMode::Change, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_ratio_simplification() {
        let result = ratio(8, 12).unwrap();
        assert_eq!((result.simplified_a, result.simplified_b), (2, 3));
        assert_eq!(result.divisor, 4);
        assert!((result.unit_rate_ab - 2.0 / 3.0).abs() < 1e-12);
        assert!(result.steps[1].contains("2 : 3"));
    }

    #[test]
    fn test_ratio_rejects_zero_terms() {
        assert!(ratio(0, 5).is_err());
        assert!(ratio(5, 0).is_err());
    }

    #[test]
    fn test_proportion_solves_for_x() {
        let result = proportion(2.0, 3.0, 8.0).unwrap();
        assert_eq!(result.value, 12.0);
        assert_eq!(result.steps[0], "1. Write as fractions: 2/3 = 8/x");
        assert_eq!(result.steps.len(), 5);
    }

    #[test]
    fn test_proportion_zero_first_term() {
        assert!(proportion(0.0, 3.0, 8.0).is_err());
    }

    #[test]
    fn test_average_statistics() {
        let result = average(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(result.mean, 25.0);
        assert_eq!(result.median, 25.0);
        assert_eq!(result.range, 30.0);
        assert!(result.modes.is_empty());
        assert_eq!(result.sorted, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_average_modes_and_odd_median() {
        let result = average(&[3.0, 1.0, 3.0, 2.0, 1.0, 3.0]).unwrap();
        assert_eq!(result.modes, vec![3.0]);

        let odd = average(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(odd.median, 3.0);
    }

    #[test]
    fn test_average_empty_rejected() {
        assert!(average(&[]).is_err());
    }

    #[test]
    fn test_square_root_perfect() {
        let result = root(RootKind::Square, 144.0).unwrap();
        assert_eq!(result.value, 12.0);
        assert!(result.is_perfect);
    }

    #[test]
    fn test_square_root_estimation_bounds() {
        let result = root(RootKind::Square, 20.0).unwrap();
        assert!(!result.is_perfect);
        assert_eq!((result.floor_root, result.ceil_root), (4.0, 5.0));
        assert_eq!((result.lower_perfect, result.upper_perfect), (16.0, 25.0));
    }

    #[test]
    fn test_square_root_negative_is_domain_error() {
        let err = root(RootKind::Square, -4.0).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_cube_root_of_negative() {
        let result = root(RootKind::Cube, -8.0).unwrap();
        assert_eq!(result.value, -2.0);
        assert!(result.is_perfect);
    }

    #[test]
    fn test_gcd_with_steps() {
        let result = gcd_with_steps(48, 18).unwrap();
        assert_eq!(result.value, 6);
        assert_eq!(result.steps[2], "GCD = 6");
    }

    #[test]
    fn test_lcm_with_steps() {
        let result = lcm_with_steps(12, 18).unwrap();
        assert_eq!(result.value, 36);
        assert_eq!(result.steps[2], "LCM = 216 ÷ 6 = 36");
    }

    #[test]
    fn test_lcm_zero_operand_reported() {
        let result = lcm_with_steps(0, 18).unwrap();
        assert_eq!(result.value, 0);
        assert_eq!(result.steps[0], "LCM is 0 when any operand is 0");
    }
}
