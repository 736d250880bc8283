use crate::signal::{MathError, SignalBuffer};
use crate::width::FixedInt;

impl<T: FixedInt> SignalBuffer<T> {
    /// Element-wise wrapping subtraction of a scalar.
    /// Never needs more bits than the input carries.
    pub fn wrapping_sub_scalar(&self, scalar: T) -> Self {
        let data = self.data.iter().map(|v| v.wrapping_sub(&scalar)).collect();

        Self {
            data,
            shape: self.shape.clone(),
        }
    }

    /// Element-wise truncating division by a scalar.
    /// Fractional scaling should be expressed as a multiplication instead (x / 0.5 == x * 2).
    pub fn div_scalar(&self, divisor: T) -> Result<Self, MathError> {
        if divisor.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        // Only MIN / -1 fails here, and it wraps back to MIN.
        let data = self
            .data
            .iter()
            .map(|&v| v.checked_div(&divisor).unwrap_or(v))
            .collect();

        Ok(Self {
            data,
            shape: self.shape.clone(),
        })
    }
}
