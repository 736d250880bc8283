use crate::signal::{MathError, SignalBuffer};
use crate::width::FixedInt;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn check_len<T>(exact: &[BigRational], bounded: &[T]) -> Result<(), MathError> {
    if exact.len() != bounded.len() {
        return Err(MathError::ShapeMismatch(vec![exact.len()], vec![bounded.len()]));
    }
    Ok(())
}

/// Mean absolute difference between the exact and the bounded result.
///
/// The exact side is ground truth. An empty pair diverges by zero.
pub fn mean_abs_divergence<T: FixedInt>(
    exact: &[BigRational],
    bounded: &SignalBuffer<T>,
) -> Result<BigRational, MathError> {
    check_len(exact, bounded.data.as_slice())?;
    if exact.is_empty() {
        return Ok(BigRational::zero());
    }

    let total = exact
        .iter()
        .zip(bounded.data.iter())
        .fold(BigRational::zero(), |acc, (e, &b)| acc + (e - b.to_rational()).abs());

    Ok(total / BigRational::from_integer(BigInt::from(exact.len())))
}

/// True when at least one element of the bounded result equals the exact one.
pub fn any_exact_match<T: FixedInt>(exact: &[BigRational], bounded: &SignalBuffer<T>) -> bool {
    exact
        .iter()
        .zip(bounded.data.iter())
        .any(|(e, &b)| *e == b.to_rational())
}

/// True when every element of the bounded result equals the exact one.
pub fn all_exact_match<T: FixedInt>(exact: &[BigRational], bounded: &SignalBuffer<T>) -> bool {
    exact.len() == bounded.len()
        && exact
            .iter()
            .zip(bounded.data.iter())
            .all(|(e, &b)| *e == b.to_rational())
}
