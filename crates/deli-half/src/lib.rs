//! Half-precision (16-bit) floating point for the deli ecosystem.
//!
//! A `Half` is 1 sign bit, 5 exponent bits (bias 15) and 10 mantissa bits.
//! This crate provides bit-exact conversion between half bit patterns and
//! `f32`, with IEEE semantics preserved throughout: signed zero, subnormals,
//! infinities, NaN and round-to-nearest-even.
//!
//! Two code paths exist for each direction. The bit-level algorithms in
//! [`convert`] are the source of truth; [`tables`] derives lookup tables
//! from them once at first use and serves the same results faster. Image
//! planes full of half pixels go through [`plane`].

pub mod bits;
pub mod convert;
pub mod half;
pub mod plane;
pub mod tables;

pub use half::Half;

/// Converts a raw half bit pattern to the `f32` it represents.
///
/// Total over all 65536 patterns; uses the precomputed expansion table.
#[inline]
pub fn half_to_float(bits: u16) -> f32 {
    tables::expand_fast(bits)
}

/// Converts an `f32` to the nearest representable half bit pattern,
/// rounding to nearest-even.
///
/// Total over all 32-bit patterns, including NaN payloads and both zeros;
/// uses the exponent-dispatch table for the common normal-range case.
#[inline]
pub fn float_to_half(value: f32) -> u16 {
    tables::reduce_fast(value)
}
