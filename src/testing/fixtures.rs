//! Reference streams and published values used across the test suites.

/// Published `get_ci(0.05)` after `cycling_pairs(1000)` on `[0, 1]`.
pub const STANDARD_REFERENCE_CI: (f64, f64) = (0.4215480, 0.7907692);

/// Published `get_ci(0.05)` after `alternating_pairs(200)` on `[0, 1]`.
pub const ROBUST_REFERENCE_CI: (f64, f64) = (0.4574146652500113, 0.5423597665906932);

/// `(weight, value)` pairs replayed cyclically to build a checkpoint state.
pub const CHECKPOINT_PAIRS: [(f64, f64); 4] = [(2.0, 1.0), (0.5, 0.0), (1.0, 1.0), (0.5, 1.0)];

/// Step count of the checkpoint state.
pub const CHECKPOINT_STEPS: u64 = 88;

/// Saved increment sum restored alongside the checkpoint counters.
pub const CHECKPOINT_STATISTIC: f64 = 85.74913;

/// Lower root at `ln(40)` of the restored checkpoint state.
pub const CHECKPOINT_ROOT: f64 = 0.8775070821950665;

/// `(x, x)` for `x` cycling through 0.5, 0.6, 0.7, 0.8, `reps` times.
pub fn cycling_pairs(reps: usize) -> Vec<(f64, f64)> {
    let cycle = [0.5, 0.6, 0.7, 0.8];
    (0..reps)
        .flat_map(|_| cycle.iter().map(|&x| (x, x)))
        .collect()
}

/// `(1.1, 1)` followed by `(1.1, 0)`, `reps` times.
pub fn alternating_pairs(reps: usize) -> Vec<(f64, f64)> {
    (0..reps).flat_map(|_| [(1.1, 1.0), (1.1, 0.0)]).collect()
}
