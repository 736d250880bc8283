use fixscale_math::{BitWidth, MathError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Maximum allowed shift bits exceeded: {shift} and error is at: {error} at {name}")]
    ScaleBudgetExceeded { name: String, shift: u32, error: f64 },
    #[error("Cannot do the operation {name} without changing the bit width from {from} to {to}")]
    WidthViolation {
        name: String,
        from: BitWidth,
        to: BitWidth,
    },
    #[error("No signals given to {name}")]
    EmptySignalList { name: String },
    #[error("Invalid operator configuration: {0}")]
    InvalidConfig(String),
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}
