use crate::expression::{Expression, Op, Term};
use crate::width::FixedInt;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

impl Op {
    fn exact_identity(self) -> BigRational {
        match self {
            Op::Mul => BigRational::one(),
            Op::Add => BigRational::zero(),
        }
    }

    fn exact(self, acc: BigRational, value: BigRational) -> BigRational {
        match self {
            Op::Mul => acc * value,
            Op::Add => acc + value,
        }
    }
}

impl<'a, T: FixedInt> Expression<'a, T> {
    /// Ground-truth evaluation with every signal divided by `2^shift`.
    ///
    /// The scaled signals are exact rationals, so the result carries the
    /// fractional part that the bounded evaluator truncates away.
    pub fn exact(&self, shift: u32) -> Vec<BigRational> {
        let divisor = BigRational::from_integer(BigInt::one() << shift);

        (0..self.len())
            .map(|i| {
                self.terms.iter().fold(self.op.exact_identity(), |acc, term| {
                    let value = match term {
                        Term::Signal(signal) => signal.data[i].to_rational() / &divisor,
                        Term::Constant(constant) => constant.to_rational(),
                    };
                    self.op.exact(acc, value)
                })
            })
            .collect()
    }
}
