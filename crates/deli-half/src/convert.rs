//! Direct bit-level conversion algorithms.
//!
//! These are the source of truth for half/float conversion. The lookup
//! tables in [`crate::tables`] are derived from these functions and must
//! agree with them on every input.

use crate::bits::{
    EXP_BIAS_DIFF, FLOAT_EXP_SHIFT, FLOAT_MAN_MASK, HALF_EXP_MASK, HALF_EXP_SHIFT, HALF_MAN_MASK,
    MAN_SHIFT, float_sign_to_half, float_to_pattern, half_sign_to_float, pattern_to_float,
};

/// Expands a half bit pattern to the exact `f32` value it represents.
///
/// Every half value, subnormals included, is exactly representable as an
/// `f32`, so this conversion is lossless. NaN payloads move into the high
/// bits of the f32 mantissa, keeping the quiet bit.
pub const fn expand(h: u16) -> f32 {
    let sign = half_sign_to_float(h);
    let e = ((h & HALF_EXP_MASK) >> HALF_EXP_SHIFT) as u32;
    let mut m = (h & HALF_MAN_MASK) as u32;

    let pattern = if e == 0 {
        if m == 0 {
            // signed zero
            sign
        } else {
            // subnormal half: renormalize until the implicit bit appears,
            // lowering the float exponent one step per shift
            let mut fe = (EXP_BIAS_DIFF + 1) as u32;
            while m & 0x0400 == 0 {
                m <<= 1;
                fe -= 1;
            }
            m &= HALF_MAN_MASK as u32;
            sign | (fe << FLOAT_EXP_SHIFT) | (m << MAN_SHIFT)
        }
    } else if e == 0x1F {
        // infinity (m == 0) or NaN; shifting the payload left keeps the
        // quiet bit in place, so NaN stays NaN
        sign | 0x7F80_0000 | (m << MAN_SHIFT)
    } else {
        // normal half: rebias the exponent, widen the mantissa
        sign | ((e + EXP_BIAS_DIFF as u32) << FLOAT_EXP_SHIFT) | (m << MAN_SHIFT)
    };

    pattern_to_float(pattern)
}

/// Reduces an `f32` to the nearest half bit pattern, round-to-nearest-even.
///
/// Handles every IEEE class: zeros keep their sign, values below the
/// smallest half subnormal flush to signed zero, values above 65504 after
/// rounding overflow to signed infinity, and NaN narrows to a half NaN
/// with at least one mantissa bit set (the top 10 payload bits survive;
/// if they are all zero the lowest mantissa bit is forced).
pub const fn reduce(f: f32) -> u16 {
    let p = float_to_pattern(f);
    let sign = float_sign_to_half(p);
    let mut e = (((p >> FLOAT_EXP_SHIFT) & 0xFF) as i32) - EXP_BIAS_DIFF;
    let mut m = (p & FLOAT_MAN_MASK) as i32;

    if e <= 0 {
        if e < -10 {
            // too small for even a subnormal half; also covers both zeros
            return sign;
        }

        // subnormal half: restore the implicit 1, then shift it into the
        // 10-bit field, rounding to nearest-even at the dropped position.
        // A rounding carry lands in the exponent field and yields the
        // smallest normal half.
        m |= 0x0080_0000;
        let t = 14 - e;
        let a = (1 << (t - 1)) - 1;
        let b = (m >> t) & 1;
        m = (m + a + b) >> t;
        sign | m as u16
    } else if e == 0xFF - EXP_BIAS_DIFF {
        if m == 0 {
            // infinity
            sign | HALF_EXP_MASK
        } else {
            // NaN: keep the top 10 payload bits, never collapse to infinity
            m >>= MAN_SHIFT;
            sign | HALF_EXP_MASK | m as u16 | (m == 0) as u16
        }
    } else {
        // normal range: round the mantissa to 10 bits, nearest-even
        m = m + 0x0FFF + ((m >> MAN_SHIFT) & 1);
        if m & 0x0080_0000 != 0 {
            // mantissa overflow carries into the exponent
            m = 0;
            e += 1;
        }
        if e > 30 {
            // overflow past the largest finite half
            sign | HALF_EXP_MASK
        } else {
            sign | ((e as u16) << HALF_EXP_SHIFT) | (m >> MAN_SHIFT) as u16
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_subnormal_renormalization_exact() {
        // each subnormal half is mantissa * 2^-24, exactly
        let scale = 2.0f32.powi(-24);
        for m in 1u16..=0x03FF {
            assert_eq!(expand(m), m as f32 * scale, "mantissa {m:#06x}");
            assert_eq!(expand(0x8000 | m), -(m as f32) * scale);
        }
    }

    #[test]
    fn test_reduce_rounding_carry_into_exponent() {
        // 2047.5 * 2^-8 sits exactly between 0x47FF and 0x4800; the even
        // candidate wins and the carry bumps the exponent field
        let f = 2047.5f32 * 2.0f32.powi(-8);
        assert_eq!(reduce(f), 0x4800);
    }
}
