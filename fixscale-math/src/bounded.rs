use crate::expression::{Expression, Op, Term};
use crate::signal::SignalBuffer;
use crate::width::FixedInt;

impl Op {
    fn bounded_identity<T: FixedInt>(self) -> T {
        match self {
            Op::Mul => T::one(),
            Op::Add => T::zero(),
        }
    }

    fn bounded<T: FixedInt>(self, acc: T, value: T) -> T {
        match self {
            Op::Mul => acc.wrapping_mul(&value),
            Op::Add => acc.wrapping_add(&value),
        }
    }
}

impl<'a, T: FixedInt> Expression<'a, T> {
    /// Evaluation in the primary signal's native width.
    ///
    /// Signals are truncated by `2^shift` first, then combined with wrapping
    /// arithmetic.
    pub fn bounded(&self, shift: u32) -> SignalBuffer<T> {
        let data = (0..self.len())
            .map(|i| {
                self.terms.iter().fold(self.op.bounded_identity::<T>(), |acc, term| {
                    let value = match term {
                        Term::Signal(signal) => signal.data[i].div_pow2(shift),
                        Term::Constant(constant) => *constant,
                    };
                    self.op.bounded(acc, value)
                })
            })
            .collect();

        SignalBuffer {
            data,
            shape: self.primary.shape.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expression, Op, SignalBuffer};

    #[test]
    fn test_bounded_wraps_on_overflow() {
        let x = SignalBuffer::from_slice(&[u32::MAX]);
        let expr = Expression::with_constant(Op::Mul, &x, 16);
        assert_eq!(expr.bounded(0).data(), &[u32::MAX.wrapping_mul(16)]);
    }

    #[test]
    fn test_bounded_truncates_before_combining() {
        let x = SignalBuffer::from_slice(&[7i32, -7]);
        let expr = Expression::with_constant(Op::Add, &x, 10);
        assert_eq!(expr.bounded(1).data(), &[13, 7]);
    }

    #[test]
    fn test_bounded_keeps_shape() {
        let a = SignalBuffer::filled(&[2, 3], 300u16);
        let b = SignalBuffer::filled(&[2, 3], 300u16);
        let out = Expression::fold(Op::Mul, &[&a, &b]).unwrap().bounded(0);
        assert_eq!(out.shape(), &[2, 3]);
        assert!(out.data().iter().all(|&v| v == 300u16.wrapping_mul(300)));
    }
}
