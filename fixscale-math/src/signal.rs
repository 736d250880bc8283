use crate::width::{BitWidth, FixedInt};
use thiserror::Error;

/// Shaped array of fixed-width integers, stored row-major.
///
/// Operators only ever read a `SignalBuffer`; every result is a fresh allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalBuffer<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Vec<usize>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
    #[error("Shape {shape:?} holds {expected} elements but {actual} were given")]
    ShapeLength {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    #[error("Shape {0:?} holds more elements than usize can count")]
    ShapeOverflow(Vec<usize>),
    #[error("Expression has no signal operand")]
    EmptyExpression,
    #[error("Division by zero")]
    DivisionByZero,
}

fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

impl<T: FixedInt> SignalBuffer<T> {
    /// Wrap row-major `data` in `shape`.
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self, MathError> {
        let expected =
            element_count(shape).ok_or_else(|| MathError::ShapeOverflow(shape.to_vec()))?;
        if expected != data.len() {
            return Err(MathError::ShapeLength {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// One-dimensional buffer copied from `data`.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
            shape: vec![data.len()],
        }
    }

    /// Buffer of `shape` with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if the element count of `shape` overflows `usize`, like `vec!` does
    /// for an impossible capacity.
    pub fn filled(shape: &[usize], value: T) -> Self {
        let len = match element_count(shape) {
            Some(len) => len,
            None => panic!("shape {:?} overflows usize", shape),
        };
        Self {
            data: vec![value; len],
            shape: shape.to_vec(),
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Declared width of the elements.
    pub fn width(&self) -> BitWidth {
        T::WIDTH
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
