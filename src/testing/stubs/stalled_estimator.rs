use crate::core::ConfidenceInterval;
use crate::error::CsError;
use crate::sequences::IntervalEstimator;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Accepts every observation but never produces a bound.
///
/// The returned handle counts `add_obs` calls from outside the boxed estimator.
pub struct StalledEstimator {
    seen: Arc<AtomicU64>,
}

pub struct AddCounter(Arc<AtomicU64>);

impl AddCounter {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

impl StalledEstimator {
    pub fn new() -> (Self, AddCounter) {
        let seen = Arc::new(AtomicU64::new(0));
        (
            Self {
                seen: Arc::clone(&seen),
            },
            AddCounter(seen),
        )
    }
}

impl IntervalEstimator for StalledEstimator {
    fn add_obs(&mut self, _weight: f64, _value: f64) -> Result<(), CsError> {
        self.seen.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn get_ci(&self, _alpha: f64) -> Result<ConfidenceInterval, CsError> {
        Err(CsError::NoBoundFound("stalled".into()))
    }

    fn estimate(&self) -> f64 {
        f64::NAN
    }

    fn observations(&self) -> u64 {
        self.seen.load(Ordering::Relaxed)
    }

    fn reset(&mut self) {
        self.seen.store(0, Ordering::Relaxed);
    }
}
