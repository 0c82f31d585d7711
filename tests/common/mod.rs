//! Common test utilities
#![allow(dead_code)]

use scatter_elements::runtime::cpu::{CpuClient, ParallelismConfig};

/// Create a CPU client with default settings
pub fn create_cpu_client() -> CpuClient {
    init_logging();
    CpuClient::new()
}

/// Clients covering the sequential path and an eagerly parallel one
///
/// The parallel client splits work down to single lanes so that small test
/// tensors still exercise the rayon kernels.
pub fn all_clients() -> Vec<(&'static str, CpuClient)> {
    init_logging();
    vec![
        ("default", CpuClient::new()),
        (
            "eager-parallel",
            CpuClient::with_config(ParallelismConfig::default().with_min_len(1))
                .expect("parallel client"),
        ),
        (
            "sequential",
            CpuClient::with_config(ParallelismConfig::sequential()).expect("sequential client"),
        ),
    ]
}

/// Route `log` output through env_logger once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Straightforward scatter used as ground truth
///
/// Walks the indices in flat order, unravels every position into coordinates,
/// swaps in the (normalized) index along `axis` and ravels into the input.
pub fn reference_scatter<T: Copy>(
    input: &[T],
    input_shape: &[usize],
    indices: &[i64],
    indices_shape: &[usize],
    updates: &[T],
    axis: usize,
    combine: impl Fn(T, T) -> T,
) -> Vec<T> {
    let mut out = input.to_vec();
    let extent = input_shape[axis] as i64;
    let mut coords = vec![0usize; indices_shape.len()];

    for (position, (&index, &update)) in indices.iter().zip(updates).enumerate() {
        let mut rem = position;
        for d in (0..indices_shape.len()).rev() {
            coords[d] = rem % indices_shape[d];
            rem /= indices_shape[d];
        }
        let index = if index < 0 { index + extent } else { index };
        if index < 0 || index >= extent {
            continue;
        }
        coords[axis] = index as usize;

        let mut offset = 0;
        for (d, &c) in coords.iter().enumerate() {
            offset = offset * input_shape[d] + c;
        }
        out[offset] = combine(out[offset], update);
    }
    out
}

/// Overwrite combiner for [`reference_scatter`]
pub fn overwrite<T>(_dst: T, src: T) -> T {
    src
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Deterministic pseudo-random values in `[0, 1)` (SplitMix64)
pub fn pseudo_random(seed: u64, len: usize) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^= z >> 31;
            (z >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}
