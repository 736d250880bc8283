use crate::signal::{MathError, SignalBuffer};
use crate::width::{BitWidth, FixedInt};

/// Arithmetic combinator applied across every term of an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Mul,
    Add,
}

/// A single operand of an [`Expression`].
///
/// Signals are divided by `2^shift` before combining; constants are used as given.
#[derive(Debug, Clone, Copy)]
pub enum Term<'a, T> {
    Signal(&'a SignalBuffer<T>),
    Constant(T),
}

/// Element-wise fold of `op` over an ordered list of terms.
///
/// The first term is always a signal: it fixes the shape and the declared width
/// of the result.
#[derive(Debug, Clone)]
pub struct Expression<'a, T> {
    pub(crate) op: Op,
    pub(crate) primary: &'a SignalBuffer<T>,
    pub(crate) terms: Vec<Term<'a, T>>,
}

impl<'a, T: FixedInt> Expression<'a, T> {
    /// `signal op constant`
    pub fn with_constant(op: Op, signal: &'a SignalBuffer<T>, constant: T) -> Self {
        Self {
            op,
            primary: signal,
            terms: vec![Term::Signal(signal), Term::Constant(constant)],
        }
    }

    /// `s0 op s1 op ... op sn`; every signal must share the shape of `s0`.
    pub fn fold(op: Op, signals: &[&'a SignalBuffer<T>]) -> Result<Self, MathError> {
        let primary = *signals.first().ok_or(MathError::EmptyExpression)?;

        for signal in &signals[1..] {
            if signal.shape != primary.shape {
                return Err(MathError::ShapeMismatch(
                    primary.shape.clone(),
                    signal.shape.clone(),
                ));
            }
        }

        Ok(Self {
            op,
            primary,
            terms: signals.iter().map(|&s| Term::Signal(s)).collect(),
        })
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// The signal whose shape and width the result inherits.
    pub fn primary(&self) -> &'a SignalBuffer<T> {
        self.primary
    }

    pub fn width(&self) -> BitWidth {
        self.primary.width()
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}
