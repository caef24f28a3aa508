//! The `Half` value type.

use std::cmp::Ordering;
use std::fmt;

use crate::bits::{HALF_EXP_MASK, HALF_MAN_MASK, HALF_SIGN_MASK};
use crate::{float_to_half, half_to_float};

/// A 16-bit floating point value: 1 sign, 5 exponent (bias 15), 10
/// mantissa bits.
///
/// The bit pattern is the complete state. Largest finite value is 65504,
/// smallest positive normal 2^-14, smallest positive subnormal 2^-24.
/// Arithmetic happens in `f32`; this type only stores, converts, compares
/// and classifies.
#[repr(transparent)]
#[derive(Copy, Clone, Default)]
pub struct Half(u16);

impl Half {
    pub const ZERO: Half = Half(0x0000);
    pub const NEG_ZERO: Half = Half(0x8000);
    pub const ONE: Half = Half(0x3C00);
    pub const INFINITY: Half = Half(0x7C00);
    pub const NEG_INFINITY: Half = Half(0xFC00);
    pub const NAN: Half = Half(0x7E00);
    /// Largest finite value, 65504.
    pub const MAX: Half = Half(0x7BFF);
    /// Smallest positive normal value, 2^-14.
    pub const MIN_POSITIVE: Half = Half(0x0400);
    /// Smallest positive subnormal value, 2^-24.
    pub const MIN_POSITIVE_SUBNORMAL: Half = Half(0x0001);
    /// Difference between 1.0 and the next larger half, 2^-10.
    pub const EPSILON: Half = Half(0x1400);

    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn from_f32(value: f32) -> Half {
        Half(float_to_half(value))
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        half_to_float(self.0)
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 & !HALF_SIGN_MASK > HALF_EXP_MASK
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 & !HALF_SIGN_MASK == HALF_EXP_MASK
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        self.0 & HALF_EXP_MASK != HALF_EXP_MASK
    }

    #[inline]
    pub const fn is_normal(self) -> bool {
        let e = self.0 & HALF_EXP_MASK;
        e != 0 && e != HALF_EXP_MASK
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        self.0 & HALF_EXP_MASK == 0 && self.0 & HALF_MAN_MASK != 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 & !HALF_SIGN_MASK == 0
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & HALF_SIGN_MASK != 0
    }

    #[inline]
    pub const fn is_sign_positive(self) -> bool {
        self.0 & HALF_SIGN_MASK == 0
    }

    /// Magnitude, by clearing the sign bit.
    #[inline]
    pub const fn abs(self) -> Half {
        Half(self.0 & !HALF_SIGN_MASK)
    }

    /// Rounds to `n` mantissa bits of precision, round-half-up on the
    /// magnitude. `n >= 10` returns the value unchanged, as does any value
    /// that would round past the largest finite half.
    pub const fn round_to_bits(self, n: u32) -> Half {
        if n >= 10 {
            return self;
        }

        let s = self.0 & HALF_SIGN_MASK;
        let mut e = self.0 & !HALF_SIGN_MASK;

        // round the combined exponent+mantissa at bit (9 - n); a mantissa
        // carry flows into the exponent field
        e >>= 9 - n;
        e += e & 1;
        e <<= 9 - n;

        if e >= HALF_EXP_MASK {
            // rounding overflowed into the infinity pattern; truncate the
            // original instead
            e = self.0 & !HALF_SIGN_MASK;
            e >>= 10 - n;
            e <<= 10 - n;
        }

        Half(s | e)
    }
}

impl From<f32> for Half {
    fn from(value: f32) -> Half {
        Half::from_f32(value)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> f32 {
        value.to_f32()
    }
}

impl std::ops::Neg for Half {
    type Output = Half;

    /// Sign-bit flip; works on zeros, infinities and NaN alike.
    fn neg(self) -> Half {
        Half(self.0 ^ HALF_SIGN_MASK)
    }
}

// comparisons follow f32 semantics: -0 == +0, NaN compares with nothing
impl PartialEq for Half {
    fn eq(&self, other: &Half) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Half) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({}, {:#06x})", self.to_f32(), self.0)
    }
}
