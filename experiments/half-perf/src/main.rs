//! Per-call timing of the half conversion routines, table fast path
//! against the direct bit-level algorithm, over image-plane-sized buffers.

mod logging;

use std::hint::black_box;
use std::time::Instant;

use deli_half::{convert, float_to_half, half_to_float};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// one 1920x1080 RGB plane set
const DEFAULT_ENTRIES: usize = 1920 * 1080 * 3;

#[derive(Debug)]
enum PerfError {
    BadEntryCount(String),
}

impl std::fmt::Display for PerfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerfError::BadEntryCount(arg) => write!(f, "bad entry count '{arg}'"),
        }
    }
}

impl std::error::Error for PerfError {}

fn time_loop<T: Copy, R>(input: &[T], mut op: impl FnMut(T) -> R) -> u128
where
    R: std::ops::Add<Output = R> + Default,
{
    let start = Instant::now();
    let mut sum = R::default();
    for &v in input {
        sum = sum + op(v);
    }
    // keep the loop observable so it cannot be optimized away
    black_box(sum);
    start.elapsed().as_nanos()
}

fn report(direction: &str, variant: &str, nanos: u128, entries: usize) {
    info!(
        "{direction} {variant:>6}: {nanos:>12} ns total, {:.3} ns/call",
        nanos as f64 / entries as f64
    );
}

fn perf_half_to_float(halfs: &[u16]) {
    let table = time_loop(halfs, half_to_float);
    let direct = time_loop(halfs, convert::expand);
    report("half -> float", "table", table, halfs.len());
    report("half -> float", "direct", direct, halfs.len());
    info!("half -> float delta: {} ns", direct as i128 - table as i128);
}

fn perf_float_to_half(floats: &[f32]) {
    // widen before summing so the checksum cannot overflow
    let table = time_loop(floats, |f| float_to_half(f) as u64);
    let direct = time_loop(floats, |f| convert::reduce(f) as u64);
    report("float -> half", "table", table, floats.len());
    report("float -> half", "direct", direct, floats.len());
    info!("float -> half delta: {} ns", direct as i128 - table as i128);
}

fn parse_entries() -> Result<usize, PerfError> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_ENTRIES),
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(PerfError::BadEntryCount(arg)),
        },
    }
}

fn main() -> Result<(), PerfError> {
    logging::init_stdout_logger();

    let entries = parse_entries()?;
    info!("timing {entries} conversions per direction");

    let mut rng = StdRng::seed_from_u64(entries as u64);

    // half -> float over the full representable range, NaNs included
    let halfs: Vec<u16> = (0..entries).map(|_| rng.random()).collect();
    perf_half_to_float(&halfs);

    // float -> half over realistic magnitudes inside the half range
    let floats: Vec<f32> = (0..entries)
        .map(|_| rng.random_range(-65504.0f32..=65504.0))
        .collect();
    perf_float_to_half(&floats);

    Ok(())
}
