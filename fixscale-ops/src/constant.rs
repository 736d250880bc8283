use crate::config::OperatorConfig;
use crate::engine::{evaluate, Scaled};
use crate::error::ScaleError;
use fixscale_math::{Expression, FixedInt, Op, SignalBuffer};

/// `x * constant`, rescaled when the product no longer fits.
#[derive(Debug, Clone)]
pub struct MulConstant<T> {
    constant: T,
    config: OperatorConfig,
}

impl<T: FixedInt> MulConstant<T> {
    pub fn new(constant: T, name: impl Into<String>) -> Self {
        Self {
            constant,
            config: OperatorConfig::new(name),
        }
    }

    pub fn from_config(constant: T, config: OperatorConfig) -> Self {
        Self { constant, config }
    }

    config_builders!();

    pub fn constant(&self) -> T {
        self.constant
    }

    pub fn apply(&self, x: &SignalBuffer<T>) -> Result<SignalBuffer<T>, ScaleError> {
        self.apply_scaled(x).map(Scaled::into_output)
    }

    pub fn apply_scaled(&self, x: &SignalBuffer<T>) -> Result<Scaled<T>, ScaleError> {
        evaluate(&self.config, &Expression::with_constant(Op::Mul, x, self.constant))
    }
}

/// `x + constant`, rescaled when the sum no longer fits.
#[derive(Debug, Clone)]
pub struct AddConstant<T> {
    constant: T,
    config: OperatorConfig,
}

impl<T: FixedInt> AddConstant<T> {
    pub fn new(constant: T, name: impl Into<String>) -> Self {
        Self {
            constant,
            config: OperatorConfig::new(name),
        }
    }

    pub fn from_config(constant: T, config: OperatorConfig) -> Self {
        Self { constant, config }
    }

    config_builders!();

    pub fn constant(&self) -> T {
        self.constant
    }

    pub fn apply(&self, x: &SignalBuffer<T>) -> Result<SignalBuffer<T>, ScaleError> {
        self.apply_scaled(x).map(Scaled::into_output)
    }

    pub fn apply_scaled(&self, x: &SignalBuffer<T>) -> Result<Scaled<T>, ScaleError> {
        evaluate(&self.config, &Expression::with_constant(Op::Add, x, self.constant))
    }
}
