//! # Calculator Catalog
//!
//! Central registry of every calculator the engine backs. Each kind maps
//! to metadata (title, description, category) and a stable slug.
//!
//! Routing is an exact-match lookup over a closed enum: a slug resolves to
//! at most one kind, and match exhaustiveness guarantees no kind can be
//! added without its metadata. Substring matching is deliberately avoided
//! so adding a calculator can never change how an existing id resolves.
//!
//! ## Usage
//!
//! ```rust
//! use math_core::catalog::CalculatorKind;
//!
//! let kind = CalculatorKind::from_slug("remainder-modulo").unwrap();
//! assert_eq!(kind, CalculatorKind::RemainderModulo);
//! assert_eq!(kind.metadata().title, "Remainder/Modulo Calculator");
//! ```

use serde::{Deserialize, Serialize};

/// Categories for grouping calculators in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorCategory {
    /// Exact fraction arithmetic
    Fractions,
    /// Decimal arithmetic and representation changes
    Decimals,
    /// Scientific and engineering notation
    Notation,
    /// Significant figures and precision tracking
    Precision,
    /// Sums, products, and progressions
    Series,
    /// GCD, LCM, remainder, modulo
    NumberTheory,
    /// Percentages, ratios, averages, roots
    Arithmetic,
}

impl CalculatorCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorCategory::Fractions => "Fractions",
            CalculatorCategory::Decimals => "Decimals",
            CalculatorCategory::Notation => "Notation",
            CalculatorCategory::Precision => "Precision",
            CalculatorCategory::Series => "Series",
            CalculatorCategory::NumberTheory => "Number Theory",
            CalculatorCategory::Arithmetic => "Arithmetic",
        }
    }
}

/// Descriptive metadata for one calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub category: CalculatorCategory,
}

/// Every calculator the engine backs.
///
/// This enum is the routing surface: the presentation layer holds a
/// `CalculatorKind`, never a free-form id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    FractionArithmetic,
    DecimalArithmetic,
    DecimalToFraction,
    ScientificNotation,
    SignificantFigures,
    SumOfSeries,
    ProductOfSeries,
    ArithmeticProgression,
    GeometricProgression,
    RemainderModulo,
    Gcd,
    Lcm,
    Percentage,
    Ratio,
    Proportion,
    Average,
    SquareRoot,
    CubeRoot,
}

/// Complete catalog, in listing order.
pub static ALL_CALCULATORS: &[CalculatorKind] = &[
    CalculatorKind::FractionArithmetic,
    CalculatorKind::DecimalArithmetic,
    CalculatorKind::DecimalToFraction,
    CalculatorKind::ScientificNotation,
    CalculatorKind::SignificantFigures,
    CalculatorKind::SumOfSeries,
    CalculatorKind::ProductOfSeries,
    CalculatorKind::ArithmeticProgression,
    CalculatorKind::GeometricProgression,
    CalculatorKind::RemainderModulo,
    CalculatorKind::Gcd,
    CalculatorKind::Lcm,
    CalculatorKind::Percentage,
    CalculatorKind::Ratio,
    CalculatorKind::Proportion,
    CalculatorKind::Average,
    CalculatorKind::SquareRoot,
    CalculatorKind::CubeRoot,
];

impl CalculatorKind {
    /// Stable routing slug for this calculator.
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::FractionArithmetic => "fraction-arithmetic",
            CalculatorKind::DecimalArithmetic => "decimal-arithmetic",
            CalculatorKind::DecimalToFraction => "decimal-to-fraction",
            CalculatorKind::ScientificNotation => "scientific-notation",
            CalculatorKind::SignificantFigures => "significant-figures",
            CalculatorKind::SumOfSeries => "sum-of-series",
            CalculatorKind::ProductOfSeries => "product-of-series",
            CalculatorKind::ArithmeticProgression => "arithmetic-progression",
            CalculatorKind::GeometricProgression => "geometric-progression",
            CalculatorKind::RemainderModulo => "remainder-modulo",
            CalculatorKind::Gcd => "gcd",
            CalculatorKind::Lcm => "lcm",
            CalculatorKind::Percentage => "percentage",
            CalculatorKind::Ratio => "ratio",
            CalculatorKind::Proportion => "proportion",
            CalculatorKind::Average => "average",
            CalculatorKind::SquareRoot => "square-root",
            CalculatorKind::CubeRoot => "cube-root",
        }
    }

    /// Exact-match slug lookup.
    pub fn from_slug(slug: &str) -> Option<Self> {
        ALL_CALCULATORS.iter().copied().find(|k| k.slug() == slug)
    }

    /// Metadata for listings and headings.
    pub fn metadata(&self) -> CalculatorMetadata {
        match self {
            CalculatorKind::FractionArithmetic => CalculatorMetadata {
                title: "Fraction Calculator",
                description: "Add, subtract, multiply, and divide fractions with simplified and mixed results.",
                category: CalculatorCategory::Fractions,
            },
            CalculatorKind::DecimalArithmetic => CalculatorMetadata {
                title: "Decimal Calculator",
                description: "Decimal arithmetic at a chosen precision with fraction, scientific, and percentage forms.",
                category: CalculatorCategory::Decimals,
            },
            CalculatorKind::DecimalToFraction => CalculatorMetadata {
                title: "Decimal to Fraction Converter",
                description: "Convert a decimal to an exact fraction via continued fractions.",
                category: CalculatorCategory::Decimals,
            },
            CalculatorKind::ScientificNotation => CalculatorMetadata {
                title: "Scientific Notation Calculator",
                description: "Convert to scientific and engineering notation and operate on mantissa/exponent pairs.",
                category: CalculatorCategory::Notation,
            },
            CalculatorKind::SignificantFigures => CalculatorMetadata {
                title: "Significant Figures Calculator",
                description: "Count, round, and propagate significant figures through calculations.",
                category: CalculatorCategory::Precision,
            },
            CalculatorKind::SumOfSeries => CalculatorMetadata {
                title: "Sum of Series Calculator",
                description: "Sum a list of numbers.",
                category: CalculatorCategory::Series,
            },
            CalculatorKind::ProductOfSeries => CalculatorMetadata {
                title: "Product of Series Calculator",
                description: "Multiply a list of numbers.",
                category: CalculatorCategory::Series,
            },
            CalculatorKind::ArithmeticProgression => CalculatorMetadata {
                title: "Arithmetic Progression (AP) Calculator",
                description: "nth term and sum of an arithmetic progression.",
                category: CalculatorCategory::Series,
            },
            CalculatorKind::GeometricProgression => CalculatorMetadata {
                title: "Geometric Progression (GP) Calculator",
                description: "nth term and sum of a geometric progression.",
                category: CalculatorCategory::Series,
            },
            CalculatorKind::RemainderModulo => CalculatorMetadata {
                title: "Remainder/Modulo Calculator",
                description: "Floor-division quotient, remainder, and non-negative modulo.",
                category: CalculatorCategory::NumberTheory,
            },
            CalculatorKind::Gcd => CalculatorMetadata {
                title: "GCD Calculator",
                description: "Greatest common divisor of two numbers.",
                category: CalculatorCategory::NumberTheory,
            },
            CalculatorKind::Lcm => CalculatorMetadata {
                title: "LCM Calculator",
                description: "Least common multiple of two numbers.",
                category: CalculatorCategory::NumberTheory,
            },
            CalculatorKind::Percentage => CalculatorMetadata {
                title: "Percentage Calculator",
                description: "Percent of a value, share of a whole, and percent change.",
                category: CalculatorCategory::Arithmetic,
            },
            CalculatorKind::Ratio => CalculatorMetadata {
                title: "Ratio Calculator",
                description: "Simplify a ratio and compute both unit rates.",
                category: CalculatorCategory::Arithmetic,
            },
            CalculatorKind::Proportion => CalculatorMetadata {
                title: "Proportion Calculator",
                description: "Solve a : b = c : x by cross-multiplication.",
                category: CalculatorCategory::Arithmetic,
            },
            CalculatorKind::Average => CalculatorMetadata {
                title: "Average Calculator",
                description: "Mean, median, mode, and range of a list.",
                category: CalculatorCategory::Arithmetic,
            },
            CalculatorKind::SquareRoot => CalculatorMetadata {
                title: "Square Root Calculator",
                description: "Square root with perfect-square detection and estimation bounds.",
                category: CalculatorCategory::Arithmetic,
            },
            CalculatorKind::CubeRoot => CalculatorMetadata {
                title: "Cube Root Calculator",
                description: "Cube root with perfect-cube detection and estimation bounds.",
                category: CalculatorCategory::Arithmetic,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(ALL_CALCULATORS.len(), 18);
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<&str> = ALL_CALCULATORS.iter().map(|k| k.slug()).collect();
        assert_eq!(slugs.len(), ALL_CALCULATORS.len());
    }

    #[test]
    fn test_slug_round_trip() {
        for kind in ALL_CALCULATORS {
            assert_eq!(CalculatorKind::from_slug(kind.slug()), Some(*kind));
        }
    }

    #[test]
    fn test_lookup_is_exact_not_substring() {
        // "average" must not be reachable through a longer id that merely
        // contains it - the failure mode of substring routing
        assert_eq!(CalculatorKind::from_slug("ten-percent-average"), None);
        assert_eq!(CalculatorKind::from_slug("averages"), None);
        assert_eq!(
            CalculatorKind::from_slug("average"),
            Some(CalculatorKind::Average)
        );
    }

    #[test]
    fn test_every_kind_has_metadata() {
        for kind in ALL_CALCULATORS {
            let meta = kind.metadata();
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert!(!meta.category.display_name().is_empty());
        }
    }

    #[test]
    fn test_kind_serialization() {
        let kind = CalculatorKind::RemainderModulo;
        let json = serde_json::to_string(&kind).unwrap();
        let roundtrip: CalculatorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, roundtrip);
    }
}
