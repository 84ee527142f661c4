//! # Roundoff
//!
//! A small instructional crate that evaluates a fixed sequence of numeric
//! "problems" and prints one line per result.
//!
//! The problems illustrate how IEEE 754 floating point and 32-bit signed
//! arithmetic misbehave in well-defined ways: decimal fractions that have no
//! exact binary form, double-to-float narrowing, two's-complement wraparound,
//! and large-magnitude sums that absorb their addends.

pub mod floats;
pub mod ints;
pub mod problems;
pub mod report;

// Re-export core types for easy access
pub use floats::{absorbs, accumulate, demote, ulp, FloatParts, FloatWidth};
pub use ints::{checked_square, wrapping_square, MAX_EXACT_SQUARE};
pub use problems::{catalog, Problem, Value};
pub use report::{render_report, write_report, ReportError};
