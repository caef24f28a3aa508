//! Whole-plane conversion helpers.
//!
//! Image pipelines store half pixels as raw `u16` planes. These helpers
//! run the table fast paths over a full plane; the only allocation is the
//! output buffer, done once up front.

use crate::{float_to_half, half_to_float};

/// Expands a plane of half bit patterns into `f32` values.
pub fn expand_plane(halfs: &[u16]) -> Vec<f32> {
    let mut out = Vec::with_capacity(halfs.len());
    for &h in halfs {
        out.push(half_to_float(h));
    }
    out
}

/// Reduces a plane of `f32` values into half bit patterns,
/// round-to-nearest-even per element.
pub fn reduce_plane(floats: &[f32]) -> Vec<u16> {
    let mut out = Vec::with_capacity(floats.len());
    for &f in floats {
        out.push(float_to_half(f));
    }
    out
}
