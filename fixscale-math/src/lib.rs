//! # fixscale-math
//!
//! Numeric kernel for bit-width-limited arithmetic.
//!
//! This crate provides [`SignalBuffer`] — a shaped array of fixed-width integers —
//! together with the two evaluators the auto-scaling operators are built on:
//!
//! - [`Expression::exact`]: ground truth on [`BigRational`] values, never overflows
//! - [`Expression::bounded`]: the same expression in the operand's native width,
//!   wrapping on overflow exactly like a hardware accumulator would
//!
//! [`mean_abs_divergence`] compares the two.

pub mod bounded;
pub mod divergence;
pub mod expression;
pub mod ops;
pub mod reference;
pub mod signal;
pub mod width;

pub use divergence::{all_exact_match, any_exact_match, mean_abs_divergence};
pub use expression::{Expression, Op, Term};
pub use signal::{MathError, SignalBuffer};
pub use width::{BitWidth, FixedInt};

pub use num_rational::BigRational;
