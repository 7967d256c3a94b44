use crate::wealth::mixture::phi;
use std::collections::BTreeMap;

/// Multiplier on `scale sqrt(t + 1)` that sets the truncation level.
pub const TRUNCATION_SCALE: f64 = 0.99141;

/// Ratio between consecutive histogram bin edges.
pub const BIN_RATIO: f64 = 1.05;

#[derive(Debug, Clone, Copy)]
struct Bin {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Bin {
    fn new(x: f64) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: x,
            max: x,
        }
    }

    fn add(&mut self, x: f64) {
        self.count += 1;
        self.sum += x;
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Chord upper bound on `sum phi(nu x)` over the bin members. `phi` is
    /// convex, so the secant through the bin extremes dominates it.
    fn penalty(&self, nu: f64) -> f64 {
        let at_min = phi(nu * self.min);
        if self.max > self.min {
            let slope = (phi(nu * self.max) - at_min) / (self.max - self.min);
            self.count as f64 * at_min + (self.sum - self.count as f64 * self.min) * slope
        } else {
            self.count as f64 * at_min
        }
    }
}

/// Predictably truncated increments and their geometric histogram.
///
/// Each raw increment `x` is clipped to `min(x, level)` where
/// `level = TRUNCATION_SCALE * scale * sqrt(t + 1)` only depends on the step
/// count. Clipping keeps a few huge importance weights from dominating the
/// wealth while never inflating it.
#[derive(Debug, Clone)]
pub struct GTilde {
    /// Number of increments folded in so far.
    pub t: u64,
    scale: f64,
    sum: f64,
    bins: BTreeMap<i64, Bin>,
}

impl GTilde {
    pub fn new(scale: f64) -> Self {
        Self {
            t: 0,
            scale,
            sum: 0.0,
            bins: BTreeMap::new(),
        }
    }

    /// Truncation level applied to the next increment.
    pub fn level(&self) -> f64 {
        TRUNCATION_SCALE * self.scale * ((self.t + 1) as f64).sqrt()
    }

    /// Sum of truncated increments.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Folds in a non-negative increment and returns its truncated value.
    pub fn add(&mut self, x: f64) -> f64 {
        let clipped = x.min(self.level());
        if clipped > 0.0 {
            let key = (clipped.ln() / BIN_RATIO.ln()).floor() as i64;
            self.bins
                .entry(key)
                .or_insert_with(|| Bin::new(clipped))
                .add(clipped);
        }
        self.sum += clipped;
        self.t += 1;
        clipped
    }

    /// Upper bound on `sum_s phi(nu x~_s)` over every truncated increment.
    /// Zero increments contribute `phi(0) = 0` and are not stored.
    pub fn penalty(&self, nu: f64) -> f64 {
        self.bins.values().map(|b| b.penalty(nu)).sum()
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }
}
