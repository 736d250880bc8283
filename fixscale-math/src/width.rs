use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt;

/// Declared numeric width of a fixed-width integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWidth {
    pub bits: u32,
    pub signed: bool,
}

impl BitWidth {
    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signed {
            write!(f, "int{}", self.bits)
        } else {
            write!(f, "uint{}", self.bits)
        }
    }
}

/// Fixed-width integer element of a [`SignalBuffer`](crate::SignalBuffer).
///
/// Arithmetic on the bounded side always wraps: overflow is the behavior being
/// measured, not an error.
pub trait FixedInt:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Into<BigInt>
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const WIDTH: BitWidth;

    /// Divide by `2^shift`, truncating toward zero.
    ///
    /// Returns zero once `shift` reaches the bit width.
    fn div_pow2(self, shift: u32) -> Self;

    /// Lossless widening into the reference domain.
    fn to_rational(self) -> BigRational {
        BigRational::from_integer(self.into())
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl FixedInt for $t {
            const WIDTH: BitWidth = BitWidth::new(<$t>::BITS, false);

            fn div_pow2(self, shift: u32) -> Self {
                if shift >= <$t>::BITS {
                    0
                } else {
                    self >> shift
                }
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl FixedInt for $t {
            const WIDTH: BitWidth = BitWidth::new(<$t>::BITS, true);

            fn div_pow2(self, shift: u32) -> Self {
                if shift >= <$t>::BITS {
                    return 0;
                }
                // Arithmetic shift floors; negative values with a remainder step back toward zero.
                let floored = self >> shift;
                if self < 0 && (floored << shift) != self {
                    floored + 1
                } else {
                    floored
                }
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64);
