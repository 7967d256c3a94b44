use crate::core::direction::Direction;
use crate::core::interval::Domain;
use crate::core::observation::Observation;
use crate::error::CsError;

/// Sum and variance proxy of the scaled increments in one direction.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScaledStatistics {
    /// `sum X_i` with `X_i` in units of the domain width.
    pub sum: f64,
    /// `sum (X_i - Xhat_{i-1})^2`.
    pub variance: f64,
}

impl ScaledStatistics {
    /// Folds in `x`, centred on the predictable `Xhat = (sum + 1/2) / (t + 1)`
    /// taken before the update.
    #[inline]
    fn add(&mut self, x: f64, t: u64) {
        let hat = (self.sum + 0.5) / (t + 1) as f64;
        self.variance += (x - hat) * (x - hat);
        self.sum += x;
    }
}

/// Running sufficient statistics of a weighted observation stream.
///
/// All updates are O(1). Values are clipped into the declared domain, so the
/// scaled increments `X = w (r - lo) / (hi - lo)` (lower direction) and
/// `X = w (hi - r) / (hi - lo)` (upper direction) are never negative.
#[derive(Debug, Clone)]
pub struct ObservationAccumulator {
    domain: Domain,
    t: u64,
    /// `sum w`
    sum_w: f64,
    /// `sum w r` over the clipped values.
    sum_wr: f64,
    low: ScaledStatistics,
    high: ScaledStatistics,
}

impl ObservationAccumulator {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            t: 0,
            sum_w: 0.0,
            sum_wr: 0.0,
            low: ScaledStatistics::default(),
            high: ScaledStatistics::default(),
        }
    }

    /// Number of accepted observations.
    #[inline]
    pub fn t(&self) -> u64 {
        self.t
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn sum_weights(&self) -> f64 {
        self.sum_w
    }

    /// Importance-weighted mean `sum w r / t`, NaN while empty.
    pub fn estimate(&self) -> f64 {
        if self.t > 0 {
            self.sum_wr / self.t as f64
        } else {
            f64::NAN
        }
    }

    /// Incorporates one observation. Invalid input leaves the state untouched.
    pub fn ingest(&mut self, weight: f64, value: f64) -> Result<(), CsError> {
        Observation::new(weight, value).validate()?;
        let r = self.domain.clamp(value);
        let d = self.domain.width();
        let x_low = weight * Direction::Lower.offset(self.domain, r) / d;
        let x_high = weight * Direction::Upper.offset(self.domain, r) / d;

        self.low.add(x_low, self.t);
        self.high.add(x_high, self.t);
        self.sum_w += weight;
        self.sum_wr += weight * r;
        self.t += 1;
        Ok(())
    }

    /// Statistics of one direction's scaled increments.
    pub fn statistics(&self, direction: Direction) -> ScaledStatistics {
        match direction {
            Direction::Lower => self.low,
            Direction::Upper => self.high,
        }
    }

    /// Forgets every observation.
    pub fn reset(&mut self) {
        *self = Self::new(self.domain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * (1.0 + a.abs().max(b.abs()))
    }

    /// Replays the stream directly on the scaled increments.
    fn direct(pairs: &[(f64, f64)], domain: Domain) -> (ScaledStatistics, ScaledStatistics) {
        let (lo, hi, d) = (domain.lo(), domain.hi(), domain.width());
        let (mut sl, mut sh, mut vl, mut vh) = (0.0, 0.0, 0.0, 0.0);
        for (i, &(w, r)) in pairs.iter().enumerate() {
            let n = (i + 1) as f64;
            let hat_l = (sl + 0.5) / n;
            let hat_h = (sh + 0.5) / n;
            let xl = w * (r - lo) / d;
            let xh = w * (hi - r) / d;
            vl += (xl - hat_l) * (xl - hat_l);
            vh += (xh - hat_h) * (xh - hat_h);
            sl += xl;
            sh += xh;
        }
        (
            ScaledStatistics {
                sum: sl,
                variance: vl,
            },
            ScaledStatistics {
                sum: sh,
                variance: vh,
            },
        )
    }

    #[test]
    fn empty_state() {
        let acc = ObservationAccumulator::new(Domain::unit());
        assert_eq!(acc.t(), 0);
        assert!(acc.estimate().is_nan());
        assert_eq!(acc.statistics(Direction::Lower).sum, 0.0);
        assert_eq!(acc.statistics(Direction::Upper).variance, 0.0);
    }

    #[test]
    fn running_sums_match_direct_replay() {
        let pairs = [(1.0, 0.2), (2.5, 0.9), (0.0, 0.4), (0.7, 1.0), (1.3, 0.0)];
        let domain = Domain::new(-1.0, 2.0).unwrap();
        let mut acc = ObservationAccumulator::new(domain);
        for &(w, r) in &pairs {
            acc.ingest(w, r).unwrap();
        }
        let (low, high) = direct(&pairs, domain);
        let got_low = acc.statistics(Direction::Lower);
        let got_high = acc.statistics(Direction::Upper);
        assert!(approx_eq(got_low.sum, low.sum));
        assert!(approx_eq(got_low.variance, low.variance));
        assert!(approx_eq(got_high.sum, high.sum));
        assert!(approx_eq(got_high.variance, high.variance));
        assert_eq!(acc.t(), 5);
        assert!(approx_eq(acc.estimate(), (0.2 + 2.25 + 0.7) / 5.0));
        assert!(approx_eq(acc.sum_weights(), 5.5));
    }

    #[test]
    fn out_of_range_values_are_clipped_to_the_domain() {
        let mut clipped = ObservationAccumulator::new(Domain::unit());
        clipped.ingest(2.0, 3.0).unwrap();
        clipped.ingest(1.0, -1.0).unwrap();

        let mut edges = ObservationAccumulator::new(Domain::unit());
        edges.ingest(2.0, 1.0).unwrap();
        edges.ingest(1.0, 0.0).unwrap();

        for direction in [Direction::Lower, Direction::Upper] {
            assert_eq!(clipped.statistics(direction), edges.statistics(direction));
        }
        assert_eq!(clipped.domain(), Domain::unit());
        assert_eq!(clipped.estimate(), 1.0);
    }

    #[test]
    fn rejected_observation_leaves_state_untouched() {
        let mut acc = ObservationAccumulator::new(Domain::unit());
        acc.ingest(1.0, 0.5).unwrap();
        let before = acc.statistics(Direction::Lower);

        assert!(acc.ingest(-1.0, 0.5).is_err());
        assert!(acc.ingest(1.0, f64::NAN).is_err());
        assert!(acc.ingest(f64::INFINITY, 0.5).is_err());

        assert_eq!(acc.t(), 1);
        assert_eq!(acc.statistics(Direction::Lower), before);
        assert_eq!(acc.sum_weights(), 1.0);
    }

    #[test]
    fn reset_restores_empty_state() {
        let mut acc = ObservationAccumulator::new(Domain::unit());
        acc.ingest(1.0, 4.0).unwrap();
        acc.reset();
        assert_eq!(acc.t(), 0);
        assert_eq!(acc.domain(), Domain::unit());
        assert_eq!(acc.sum_weights(), 0.0);
    }
}
