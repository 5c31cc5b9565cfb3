//! # Series
//!
//! List summation/product plus arithmetic- and geometric-progression
//! closed forms with bounded term previews.
//!
//! Overflow policy: any non-finite result under IEEE-754 double semantics
//! is reported as an [`Overflow`](crate::errors::CalcError::Overflow)
//! error rather than propagated to the caller.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Number of terms included in a progression preview.
const MAX_PREVIEW_TERMS: u32 = 10;

/// Result of a list-mode sum or product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResult {
    pub value: f64,
    /// The terms the value was computed over
    pub terms: Vec<f64>,
    pub steps: Vec<String>,
}

fn validate_terms(terms: &[f64]) -> CalcResult<()> {
    if terms.is_empty() {
        return Err(CalcError::invalid_input(
            "terms",
            "",
            "Expected at least one number",
        ));
    }
    if let Some(bad) = terms.iter().find(|t| !t.is_finite()) {
        return Err(CalcError::invalid_input(
            "terms",
            bad.to_string(),
            "Every term must be finite",
        ));
    }
    Ok(())
}

fn join(terms: &[f64], sep: &str) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Sum of a list of numbers. An empty list is an error, not zero.
pub fn sum(terms: &[f64]) -> CalcResult<SeriesResult> {
    validate_terms(terms)?;
    let value: f64 = terms.iter().sum();
    if !value.is_finite() {
        return Err(CalcError::overflow("series sum"));
    }
    let steps = vec![
        format!("Numbers: [{}]", join(terms, ", ")),
        format!("Sum: {} = {}", join(terms, " + "), value),
    ];
    Ok(SeriesResult {
        value,
        terms: terms.to_vec(),
        steps,
    })
}

/// Product of a list of numbers. An empty list is an error, not one.
pub fn product(terms: &[f64]) -> CalcResult<SeriesResult> {
    validate_terms(terms)?;
    let value: f64 = terms.iter().product();
    if !value.is_finite() {
        return Err(CalcError::overflow("series product"));
    }
    let steps = vec![
        format!("Numbers: [{}]", join(terms, ", ")),
        format!("Product: {} = {}", join(terms, " × "), value),
    ];
    Ok(SeriesResult {
        value,
        terms: terms.to_vec(),
        steps,
    })
}

/// Arithmetic progression parameters: first term, common difference,
/// number of terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApInput {
    pub first: f64,
    pub difference: f64,
    pub n: u32,
}

/// Geometric progression parameters: first term, common ratio, number of
/// terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpInput {
    pub first: f64,
    pub ratio: f64,
    pub n: u32,
}

/// Closed-form progression result with a bounded term preview.
///
/// ## JSON Example
///
/// ```json
/// {
///   "nth_term": 14.0,
///   "sum": 40.0,
///   "terms": [2.0, 5.0, 8.0, 11.0, 14.0],
///   "steps": [
///     "First term a = 2, common difference d = 3",
///     "nth term = a + (n-1)d = 2 + (5-1)×3 = 14",
///     "Sum = n/2 × [2a + (n-1)d] = 5/2 × [2×2 + (5-1)×3] = 40"
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionResult {
    pub nth_term: f64,
    pub sum: f64,
    /// First `min(n, 10)` terms of the progression
    pub terms: Vec<f64>,
    pub steps: Vec<String>,
}

fn validate_progression(first: f64, step: f64, n: u32) -> CalcResult<()> {
    if !first.is_finite() || !step.is_finite() {
        return Err(CalcError::invalid_input(
            "progression",
            format!("{first}, {step}"),
            "Parameters must be finite",
        ));
    }
    if n == 0 {
        return Err(CalcError::invalid_input(
            "n",
            "0",
            "A progression needs at least one term",
        ));
    }
    Ok(())
}

/// Arithmetic progression: `nth = a + (n-1)d`, `sum = n/2 · (2a + (n-1)d)`.
pub fn arithmetic_progression(input: &ApInput) -> CalcResult<ProgressionResult> {
    let ApInput {
        first: a,
        difference: d,
        n,
    } = *input;
    validate_progression(a, d, n)?;

    let n_f = n as f64;
    let nth_term = a + (n_f - 1.0) * d;
    let sum = n_f / 2.0 * (2.0 * a + (n_f - 1.0) * d);
    if !nth_term.is_finite() || !sum.is_finite() {
        return Err(CalcError::overflow("arithmetic progression"));
    }

    let terms: Vec<f64> = (0..n.min(MAX_PREVIEW_TERMS))
        .map(|i| a + i as f64 * d)
        .collect();

    let steps = vec![
        format!("First term a = {}, common difference d = {}", a, d),
        format!(
            "nth term = a + (n-1)d = {} + ({}-1)×{} = {}",
            a, n, d, nth_term
        ),
        format!(
            "Sum = n/2 × [2a + (n-1)d] = {}/2 × [2×{} + ({}-1)×{}] = {}",
            n, a, n, d, sum
        ),
    ];

    Ok(ProgressionResult {
        nth_term,
        sum,
        terms,
        steps,
    })
}

/// Geometric progression: `nth = a·r^(n-1)`; the sum degenerates to `a·n`
/// when `r = 1`, otherwise `a·(r^n - 1)/(r - 1)`.
pub fn geometric_progression(input: &GpInput) -> CalcResult<ProgressionResult> {
    let GpInput {
        first: a,
        ratio: r,
        n,
    } = *input;
    validate_progression(a, r, n)?;

    let n_f = n as f64;
    let nth_term = a * r.powf(n_f - 1.0);
    let sum = if r == 1.0 {
        a * n_f
    } else {
        a * (r.powf(n_f) - 1.0) / (r - 1.0)
    };
    if !nth_term.is_finite() || !sum.is_finite() {
        return Err(CalcError::overflow("geometric progression"));
    }

    let terms: Vec<f64> = (0..n.min(MAX_PREVIEW_TERMS))
        .map(|i| a * r.powi(i as i32))
        .collect();

    let mut steps = vec![
        format!("First term a = {}, common ratio r = {}", a, r),
        format!(
            "nth term = a × r^(n-1) = {} × {}^{} = {}",
            a,
            r,
            n - 1,
            nth_term
        ),
    ];
    if r == 1.0 {
        steps.push(format!("Sum = a × n = {} × {} = {}", a, n, sum));
    } else {
        steps.push(format!(
            "Sum = a(r^n - 1)/(r - 1) = {}({}^{} - 1)/({} - 1) = {}",
            a, r, n, r, sum
        ));
    }

    Ok(ProgressionResult {
        nth_term,
        sum,
        terms,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_list() {
        let result = sum(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(result.value, 15.0);
        assert_eq!(result.steps[0], "Numbers: [1, 2, 3, 4, 5]");
        assert_eq!(result.steps[1], "Sum: 1 + 2 + 3 + 4 + 5 = 15");
    }

    #[test]
    fn test_product_of_list() {
        let result = product(&[2.0, 3.0, 4.0]).unwrap();
        assert_eq!(result.value, 24.0);
    }

    #[test]
    fn test_empty_list_is_an_error() {
        assert_eq!(sum(&[]).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(product(&[]).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_term_rejected() {
        assert!(sum(&[1.0, f64::NAN]).is_err());
        assert!(product(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_ap_sum_and_terms() {
        let result = arithmetic_progression(&ApInput {
            first: 2.0,
            difference: 3.0,
            n: 5,
        })
        .unwrap();
        assert_eq!(result.sum, 40.0);
        assert_eq!(result.nth_term, 14.0);
        assert_eq!(result.terms, vec![2.0, 5.0, 8.0, 11.0, 14.0]);
    }

    #[test]
    fn test_ap_preview_is_bounded() {
        let result = arithmetic_progression(&ApInput {
            first: 0.0,
            difference: 1.0,
            n: 1000,
        })
        .unwrap();
        assert_eq!(result.terms.len(), 10);
        assert_eq!(result.nth_term, 999.0);
    }

    #[test]
    fn test_gp_closed_form() {
        let result = geometric_progression(&GpInput {
            first: 2.0,
            ratio: 3.0,
            n: 4,
        })
        .unwrap();
        assert_eq!(result.nth_term, 54.0);
        assert_eq!(result.sum, 80.0);
        assert_eq!(result.terms, vec![2.0, 6.0, 18.0, 54.0]);
    }

    #[test]
    fn test_gp_unit_ratio_degenerates() {
        let result = geometric_progression(&GpInput {
            first: 2.5,
            ratio: 1.0,
            n: 4,
        })
        .unwrap();
        assert_eq!(result.sum, 10.0);
        assert_eq!(result.nth_term, 2.5);
    }

    #[test]
    fn test_gp_overflow_reported() {
        let err = geometric_progression(&GpInput {
            first: 2.0,
            ratio: 10.0,
            n: 400,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_zero_terms_rejected() {
        assert!(arithmetic_progression(&ApInput {
            first: 1.0,
            difference: 1.0,
            n: 0,
        })
        .is_err());
    }
}
