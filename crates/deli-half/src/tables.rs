//! Precomputed lookup tables and the table-driven fast paths.
//!
//! Both tables are derived from the algorithms in [`crate::convert`] on
//! first use, behind a `LazyLock`. That one-time build is the only
//! synchronization point; afterwards the tables are plain immutable data
//! and any number of threads can read them freely.

use std::sync::LazyLock;

use crate::bits::{EXP_BIAS_DIFF, FLOAT_EXP_SHIFT, FLOAT_MAN_MASK, MAN_SHIFT, float_to_pattern};
use crate::convert;

struct Tables {
    /// `expansion[h] == convert::expand(h)` for every 16-bit pattern.
    expansion: Vec<f32>,
    /// Indexed by the 9-bit sign+exponent field of an f32. Zero means the
    /// input needs the slow path; nonzero is the half sign+exponent
    /// pre-shifted for combination with a rounded mantissa.
    dispatch: [u16; 512],
}

static TABLES: LazyLock<Tables> = LazyLock::new(build);

fn build() -> Tables {
    let mut expansion = Vec::with_capacity(0x10000);
    for h in 0..=0xFFFFu16 {
        expansion.push(convert::expand(h));
    }

    // Nonzero entries cover unbiased half exponents 1..=29 only. Exponent
    // 30 can round up into infinity, so it goes to the slow path with the
    // rest of the edge cases (zeros, subnormals, overflow, inf, NaN).
    let mut dispatch = [0u16; 512];
    for i in 0..256usize {
        let e = i as i32 - EXP_BIAS_DIFF;
        if e > 0 && e < 30 {
            dispatch[i] = (e as u16) << 10;
            dispatch[i | 0x100] = (e as u16) << 10 | 0x8000;
        }
    }

    log::debug!("half conversion tables built (65536 + 512 entries)");

    Tables {
        expansion,
        dispatch,
    }
}

/// Table-driven half expansion: one indexed load.
#[inline]
pub fn expand_fast(h: u16) -> f32 {
    TABLES.expansion[h as usize]
}

/// Table-driven float reduction.
///
/// Zeros return early with their sign preserved. A nonzero dispatch entry
/// means the value lands in the half normal range without overflow, and
/// only the mantissa needs rounding; everything else falls back to
/// [`convert::reduce`].
#[inline]
pub fn reduce_fast(f: f32) -> u16 {
    let p = float_to_pattern(f);

    if f == 0.0 {
        return (p >> 16) as u16;
    }

    let e = TABLES.dispatch[((p >> FLOAT_EXP_SHIFT) & 0x1FF) as usize];
    if e != 0 {
        // round the 23-bit mantissa to 10 bits, nearest-even; a carry out
        // of the mantissa propagates into the exponent through the add
        let m = p & FLOAT_MAN_MASK;
        e + ((m + 0x0FFF + ((m >> MAN_SHIFT) & 1)) >> MAN_SHIFT) as u16
    } else {
        convert::reduce(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_zero_exactly_for_slow_path_exponents() {
        for i in 0..512usize {
            let e = (i & 0xFF) as i32 - EXP_BIAS_DIFF;
            let entry = TABLES.dispatch[i];
            if e > 0 && e < 30 {
                assert_eq!(entry & 0x7C00, (e as u16) << 10, "index {i}");
                assert_eq!(entry & 0x8000 != 0, i >= 0x100, "index {i}");
                assert_eq!(entry & 0x03FF, 0, "index {i}");
            } else {
                assert_eq!(entry, 0, "index {i}");
            }
        }
    }

    #[test]
    fn test_expansion_table_matches_direct_algorithm() {
        for h in 0..=0xFFFFu16 {
            assert_eq!(
                TABLES.expansion[h as usize].to_bits(),
                convert::expand(h).to_bits(),
                "pattern {h:#06x}"
            );
        }
    }
}
