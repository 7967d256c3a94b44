use crate::core::ConfidenceInterval;
use std::fmt::{Display, Formatter, Result};

/// State of a confidence sequence after a given number of observations.
///
/// `interval` is `None` when the estimator could not produce a bound at that
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundSnapshot {
    pub observations_seen: u64,
    pub estimate: f64,
    pub interval: Option<ConfidenceInterval>,
    pub seconds: f64,
}

impl BoundSnapshot {
    /// Interval width, NaN without a bound.
    pub fn width(&self) -> f64 {
        self.interval.map_or(f64::NAN, |ci| ci.width())
    }

    /// Whether the interval rules `value` out. `false` without a bound.
    pub fn excludes(&self, value: f64) -> bool {
        self.interval.is_some_and(|ci| !ci.contains(value))
    }
}

impl Display for BoundSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.interval {
            Some(ci) => write!(
                f,
                "seen={}, est={:.6}, ci={}, t={:.3}s",
                self.observations_seen, self.estimate, ci, self.seconds
            ),
            None => write!(
                f,
                "seen={}, est={:.6}, ci=none, t={:.3}s",
                self.observations_seen, self.estimate, self.seconds
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_interval() {
        let mut s = BoundSnapshot {
            observations_seen: 10,
            estimate: 0.5,
            interval: Some(ConfidenceInterval::from_bounds(0.25, 0.75)),
            seconds: 1.5,
        };
        assert_eq!(
            s.to_string(),
            "seen=10, est=0.500000, ci=[0.250000, 0.750000], t=1.500s"
        );
        assert_eq!(s.width(), 0.5);
        assert!(s.excludes(0.8));
        assert!(!s.excludes(0.5));

        s.interval = None;
        assert_eq!(s.to_string(), "seen=10, est=0.500000, ci=none, t=1.500s");
        assert!(s.width().is_nan());
        assert!(!s.excludes(0.8));
    }
}
