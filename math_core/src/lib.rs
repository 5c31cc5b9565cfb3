//! # math_core - Calculation & Derivation Engine
//!
//! `math_core` is the computational heart of Mathsteps: pure numeric
//! algorithms that turn typed input into a final value *and* an ordered,
//! human-readable sequence of derivation steps ("show your work"), reused
//! across dozens of calculator screens. All inputs and outputs are
//! JSON-serializable, so the presentation layer (or an LLM caller) can
//! consume results directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results;
//!   nothing is cached or shared between calls
//! - **Steps are contract**: every result carries its derivation, and
//!   tests assert step content, not just values
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error values, never panics across the API
//!
//! ## Quick Start
//!
//! ```rust
//! use math_core::calculators::fraction::{self, Fraction};
//!
//! let a = Fraction::new(1, 2).unwrap();
//! let b = Fraction::new(1, 3).unwrap();
//! let result = fraction::add(a, b).unwrap();
//!
//! assert_eq!(result.value, Fraction::new(5, 6).unwrap());
//! for step in &result.steps {
//!     println!("{step}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - the computation modules (fractions, decimals,
//!   significant figures, series, remainder/modulo, notation, tools)
//! - [`catalog`] - the closed registry of calculator kinds and metadata
//! - [`primitives`] - GCD/LCM and safe input parsing
//! - [`format`] - fixed/precision/exponential formatting conventions
//! - [`errors`] - structured error types

pub mod calculators;
pub mod catalog;
pub mod errors;
pub mod format;
pub mod primitives;

// Re-export commonly used types at crate root for convenience
pub use calculators::fraction::{Fraction, MixedNumber};
pub use catalog::{CalculatorKind, ALL_CALCULATORS};
pub use errors::{CalcError, CalcResult};
pub use format::FormatOptions;
