use deli_half::{convert, float_to_half, half_to_float, tables};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_expansion_fast_path_matches_direct_exhaustively() {
    for h in 0..=0xFFFFu16 {
        assert_eq!(
            tables::expand_fast(h).to_bits(),
            convert::expand(h).to_bits(),
            "pattern {h:#06x}"
        );
    }
}

#[test]
fn test_reduction_fast_path_matches_direct_on_exponent_classes() {
    // every exponent field with mantissas probing the rounding boundary,
    // both signs: zeros, subnormals, normals, overflow, inf, NaN
    let mantissas = [
        0x00_0000u32,
        0x00_0001,
        0x00_0FFF,
        0x00_1000,
        0x00_1001,
        0x00_2000,
        0x00_3000,
        0x3F_FFFF,
        0x40_0000,
        0x7F_E000,
        0x7F_F000,
        0x7F_FFFF,
    ];
    for exp in 0..=0xFFu32 {
        for &m in &mantissas {
            for sign in [0u32, 0x8000_0000] {
                let f = f32::from_bits(sign | (exp << 23) | m);
                assert_eq!(
                    tables::reduce_fast(f),
                    convert::reduce(f),
                    "pattern {:#010x}",
                    f.to_bits()
                );
            }
        }
    }
}

#[test]
fn test_reduction_fast_path_matches_direct_on_random_patterns() {
    // every u32 is a valid f32 pattern, NaN payloads included
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200_000 {
        let f = f32::from_bits(rng.random::<u32>());
        assert_eq!(
            tables::reduce_fast(f),
            convert::reduce(f),
            "pattern {:#010x}",
            f.to_bits()
        );
    }
}

#[test]
fn test_public_entry_points_use_table_semantics() {
    assert_eq!(half_to_float(0x3C00), 1.0);
    assert_eq!(float_to_half(65504.0), 0x7BFF);
    assert_eq!(float_to_half(65520.0), 0x7C00);
    assert_eq!(float_to_half(-0.0), 0x8000);
    assert_eq!(half_to_float(0x8000).to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_public_round_trip_identity() {
    for h in 0..=0xFFFFu16 {
        if h & 0x7C00 == 0x7C00 && h & 0x03FF != 0 {
            continue;
        }
        assert_eq!(float_to_half(half_to_float(h)), h, "pattern {h:#06x}");
    }
}

#[test]
fn test_concurrent_readers_share_one_table_build() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                for h in (t as u16..0x400).step_by(8) {
                    assert_eq!(
                        tables::expand_fast(h).to_bits(),
                        convert::expand(h).to_bits()
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
