//! # Calculators
//!
//! The computation modules behind the catalog. Each follows the same
//! pattern:
//!
//! - typed input (plain structs/enums, JSON-serializable)
//! - a pure function returning `CalcResult<*Result>`
//! - every `*Result` carries the value plus an ordered `steps` list - the
//!   worked derivation is part of the contract, not a display nicety
//!
//! The modules are independent of each other except for the shared
//! primitives (GCD/LCM) and the [`Fraction`](fraction::Fraction) value
//! type that the decimal converter produces.

pub mod decimal;
pub mod fraction;
pub mod remainder;
pub mod scientific;
pub mod series;
pub mod sigfig;
pub mod tools;

// Re-export the most commonly used types
pub use decimal::{DecimalInput, DecimalOp, DecimalResult, EngineeringNotation, ScientificNotation};
pub use fraction::{Fraction, FractionOp, FractionResult, MixedNumber};
pub use remainder::RemainderResult;
pub use scientific::{SciNumber, SciOp};
pub use series::{ApInput, GpInput, ProgressionResult, SeriesResult};
pub use sigfig::{DigitClass, SigFigAnalysis, SigFigOp, SigFigOpInput, SigFigOpResult};
