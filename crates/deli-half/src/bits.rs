//! Bit layout constants and lossless reinterpretation between floats and
//! their bit patterns.
//!
//! Every boundary where a conversion algorithm exchanges an integer bit
//! pattern for a floating value goes through [`float_to_pattern`] and
//! [`pattern_to_float`], so no value-changing numeric conversion can sneak
//! in.

// half layout: 1 sign, 5 exponent, 10 mantissa
pub const HALF_SIGN_MASK: u16 = 0x8000;
pub const HALF_EXP_MASK: u16 = 0x7C00;
pub const HALF_MAN_MASK: u16 = 0x03FF;
pub const HALF_EXP_SHIFT: u32 = 10;
pub const HALF_EXP_BIAS: i32 = 15;

// f32 layout: 1 sign, 8 exponent, 23 mantissa
pub const FLOAT_SIGN_MASK: u32 = 0x8000_0000;
pub const FLOAT_EXP_MASK: u32 = 0x7F80_0000;
pub const FLOAT_MAN_MASK: u32 = 0x007F_FFFF;
pub const FLOAT_EXP_SHIFT: u32 = 23;
pub const FLOAT_EXP_BIAS: i32 = 127;

/// Bias difference between the two exponent fields (127 - 15).
pub const EXP_BIAS_DIFF: i32 = FLOAT_EXP_BIAS - HALF_EXP_BIAS;

/// Width difference between the two mantissa fields (23 - 10).
pub const MAN_SHIFT: u32 = FLOAT_EXP_SHIFT - HALF_EXP_SHIFT;

/// Reinterprets an `f32` as its raw 32-bit pattern. Pure bit copy.
#[inline(always)]
pub const fn float_to_pattern(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterprets a raw 32-bit pattern as an `f32`. Pure bit copy.
#[inline(always)]
pub const fn pattern_to_float(pattern: u32) -> f32 {
    f32::from_bits(pattern)
}

/// Sign bit of a half pattern, moved into f32 sign position.
#[inline(always)]
pub(crate) const fn half_sign_to_float(h: u16) -> u32 {
    ((h & HALF_SIGN_MASK) as u32) << 16
}

/// Sign bit of an f32 pattern, moved into half sign position.
#[inline(always)]
pub(crate) const fn float_sign_to_half(p: u32) -> u16 {
    ((p >> 16) as u16) & HALF_SIGN_MASK
}
