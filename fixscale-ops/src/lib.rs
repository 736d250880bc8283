//! # fixscale-ops
//!
//! Auto-scaling fixed-point operators.
//!
//! Each operator evaluates its expression twice, once exactly and once in the
//! operand's own bit width. When the two disagree, it searches for the smallest
//! right shift `k` that keeps the mean absolute error within budget. The chosen
//! shift is logged through `tracing` and returned from `apply_scaled`.
//!
//! Four variants:
//! - [`MulConstant`]: `x * c`
//! - [`AddConstant`]: `x + c`
//! - [`MulSignals`]: `x0 * x1 * ... * xn`
//! - [`AddSignals`]: `x0 + x1 + ... + xn`
//!
//! # Example
//! ```
//! use fixscale_math::SignalBuffer;
//! use fixscale_ops::{MulConstant, MulSignals};
//!
//! let x = SignalBuffer::filled(&[4], 1u32 << 16);
//! let scaled = MulConstant::new(16, "First Multiplication").apply(&x).unwrap();
//! assert_eq!(scaled.data()[0], 1 << 20);
//!
//! let square = MulSignals::new("square").apply_scaled(&[&scaled, &scaled]).unwrap();
//! assert_eq!(square.shift, 5);
//! ```

#[macro_use]
pub mod config;
pub mod constant;
pub mod engine;
pub mod error;
pub mod signals;

pub use config::{
    FastPathPolicy, OperatorConfig, DEFAULT_ALLOWED_ERROR, DEFAULT_MAXIMUM_ALLOWED_BIT_SHIFT,
};
pub use constant::{AddConstant, MulConstant};
pub use engine::Scaled;
pub use error::ScaleError;
pub use signals::{AddSignals, MulSignals};
