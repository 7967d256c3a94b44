use crate::core::{ConfidenceInterval, Direction, Domain, ObservationAccumulator};
use crate::error::{CsError, check_alpha};
use crate::sequences::IntervalEstimator;
use crate::solvers::{BoundSolver, BrentOptions};
use crate::wealth::{StitchedBoundary, StitchedProcess, WealthMemo};
use tracing::debug;

/// Confidence sequence for importance-weighted means of bounded values.
///
/// Values are expected in a declared range (default `[0, 1]`) and are
/// clipped into it, so every bound lies inside that range. Each side is an
/// empirical-Bernstein bound on the scaled increments, stitched over
/// geometric epochs of the variance proxy, at level `alpha / 2`.
#[derive(Debug, Clone)]
pub struct ConfidenceSequence {
    boundary: StitchedBoundary,
    solver: BoundSolver,
    acc: ObservationAccumulator,
}

impl ConfidenceSequence {
    pub fn new() -> Self {
        Self::with_boundary(Domain::unit(), StitchedBoundary::default())
    }

    pub fn with_domain(lo: f64, hi: f64) -> Result<Self, CsError> {
        Ok(Self::with_boundary(
            Domain::new(lo, hi)?,
            StitchedBoundary::default(),
        ))
    }

    pub fn with_boundary(domain: Domain, boundary: StitchedBoundary) -> Self {
        Self {
            boundary,
            solver: BoundSolver::new(BrentOptions::default()),
            acc: ObservationAccumulator::new(domain),
        }
    }

    pub fn accumulator(&self) -> &ObservationAccumulator {
        &self.acc
    }

    pub fn boundary(&self) -> &StitchedBoundary {
        &self.boundary
    }

    pub fn add_obs(&mut self, weight: f64, value: f64) -> Result<(), CsError> {
        self.acc.ingest(weight, value).inspect_err(|e| {
            debug!(error = %e, t = self.acc.t(), "observation rejected");
        })
    }

    /// The one-sided process of `direction` over the current statistics.
    pub fn process(&self, direction: Direction) -> StitchedProcess {
        StitchedProcess::new(
            direction,
            self.acc.domain(),
            self.acc.t(),
            self.acc.sum_weights(),
            self.acc.statistics(direction),
            self.boundary,
        )
    }

    pub fn get_ci(&self, alpha: f64) -> Result<ConfidenceInterval, CsError> {
        check_alpha(alpha)?;
        let t = self.acc.t();
        if t == 0 {
            return Ok(self.acc.domain().as_interval());
        }

        let low = self.acc.statistics(Direction::Lower);
        let high = self.acc.statistics(Direction::Upper);
        if !(low.sum.is_finite()
            && low.variance.is_finite()
            && high.sum.is_finite()
            && high.variance.is_finite())
        {
            debug!(t, "sufficient statistics overflowed");
            return Err(CsError::NoBoundFound(
                "sufficient statistics are not finite".into(),
            ));
        }

        let side = alpha / 2.0;
        let mut memo = WealthMemo::new();
        let lower = self
            .solver
            .solve(&self.process(Direction::Lower), side, &mut memo)?;
        let upper = self
            .solver
            .solve(&self.process(Direction::Upper), side, &mut memo)?;
        Ok(ConfidenceInterval::from_bounds(lower, upper))
    }
}

impl Default for ConfidenceSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalEstimator for ConfidenceSequence {
    fn add_obs(&mut self, weight: f64, value: f64) -> Result<(), CsError> {
        ConfidenceSequence::add_obs(self, weight, value)
    }

    fn get_ci(&self, alpha: f64) -> Result<ConfidenceInterval, CsError> {
        ConfidenceSequence::get_ci(self, alpha)
    }

    fn estimate(&self) -> f64 {
        self.acc.estimate()
    }

    fn observations(&self) -> u64 {
        self.acc.t()
    }

    fn reset(&mut self) {
        self.acc.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{cycling_pairs, STANDARD_REFERENCE_CI};
    use proptest::prelude::*;

    fn feed(cs: &mut ConfidenceSequence, pairs: &[(f64, f64)]) {
        for &(w, r) in pairs {
            cs.add_obs(w, r).unwrap();
        }
    }

    #[test]
    fn empty_sequence_returns_declared_domain() {
        let cs = ConfidenceSequence::with_domain(-1.0, 2.0).unwrap();
        let ci = cs.get_ci(0.05).unwrap();
        assert_eq!((ci.lower, ci.upper), (-1.0, 2.0));
        assert!(cs.estimate().is_nan());
    }

    #[test]
    fn cycling_stream_matches_regression_values() {
        let mut cs = ConfidenceSequence::new();
        feed(&mut cs, &cycling_pairs(1000));
        assert_eq!(cs.observations(), 4000);

        let ci = cs.get_ci(0.05).unwrap();
        assert!((ci.lower - 0.42154809125179127).abs() < 1e-7, "{ci}");
        assert!((ci.upper - 0.7907692966538578).abs() < 1e-7, "{ci}");

        let ci = cs.get_ci(0.01).unwrap();
        assert!((ci.lower - 0.42026960870888636).abs() < 1e-7, "{ci}");
        assert!((ci.upper - 0.7916169915171856).abs() < 1e-7, "{ci}");
    }

    #[test]
    fn cycling_stream_tracks_published_reference() {
        let mut cs = ConfidenceSequence::new();
        feed(&mut cs, &cycling_pairs(1000));
        let ci = cs.get_ci(0.05).unwrap();
        let (lo_ref, hi_ref) = STANDARD_REFERENCE_CI;
        assert!((ci.lower - lo_ref).abs() < 1e-5, "{ci}");
        assert!((ci.upper - hi_ref).abs() < 1e-5, "{ci}");
    }

    #[test]
    fn estimate_is_importance_weighted_mean() {
        let mut cs = ConfidenceSequence::new();
        feed(&mut cs, &[(2.0, 0.5), (0.0, 1.0), (1.0, 0.25)]);
        assert!((cs.estimate() - 1.25 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn invalid_alpha_is_rejected() {
        let mut cs = ConfidenceSequence::new();
        cs.add_obs(1.0, 0.5).unwrap();
        for alpha in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            assert!(matches!(
                cs.get_ci(alpha),
                Err(CsError::InvalidArgument { name: "alpha", .. })
            ));
        }
    }

    #[test]
    fn rejected_observation_keeps_count() {
        let mut cs = ConfidenceSequence::new();
        feed(&mut cs, &[(1.0, 0.3), (1.0, 0.6)]);
        let before = cs.get_ci(0.05).unwrap();

        assert!(cs.add_obs(-1.0, 0.5).is_err());
        assert!(cs.add_obs(1.0, f64::INFINITY).is_err());
        assert!(cs.add_obs(f64::NAN, 0.5).is_err());

        assert_eq!(cs.observations(), 2);
        assert_eq!(cs.get_ci(0.05).unwrap(), before);
    }

    #[test]
    fn get_ci_is_idempotent() {
        let mut cs = ConfidenceSequence::new();
        feed(&mut cs, &cycling_pairs(50));
        let a = cs.get_ci(0.05).unwrap();
        let b = cs.get_ci(0.05).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn all_zero_weights_have_no_bound() {
        let mut cs = ConfidenceSequence::new();
        for _ in 0..500 {
            cs.add_obs(0.0, 0.7).unwrap();
        }
        assert_eq!(cs.observations(), 500);
        assert!(matches!(cs.get_ci(0.05), Err(CsError::NoBoundFound(_))));
    }

    #[test]
    fn out_of_range_values_are_clipped_into_the_domain() {
        let mut cs = ConfidenceSequence::new();
        for i in 0..200 {
            cs.add_obs(1.0, if i % 2 == 0 { 2.0 } else { -1.0 }).unwrap();
        }
        assert_eq!(cs.accumulator().domain(), Domain::unit());
        assert_eq!(cs.estimate(), 0.5);
        let ci = cs.get_ci(0.05).unwrap();
        assert!(ci.lower >= 0.0 && ci.upper <= 1.0, "{ci}");
        assert!(ci.contains(0.5));
    }

    #[test]
    fn bounds_match_the_closed_form() {
        let mut cs = ConfidenceSequence::new();
        feed(&mut cs, &cycling_pairs(300));
        let t = cs.observations();
        let b = cs.boundary();
        let low = cs.accumulator().statistics(Direction::Lower);
        let high = cs.accumulator().statistics(Direction::Upper);
        let lower = b.lower_mean_bound(low.sum, low.variance, t, 0.025);
        let upper = 1.0 - b.lower_mean_bound(high.sum, high.variance, t, 0.025);

        let ci = cs.get_ci(0.05).unwrap();
        assert!((ci.lower - lower).abs() < 1e-10, "{ci}");
        assert!((ci.upper - upper).abs() < 1e-10, "{ci}");
    }

    #[test]
    fn overflowing_statistics_are_no_bound() {
        let mut cs = ConfidenceSequence::new();
        cs.add_obs(1e300, 1.0).unwrap();
        assert!(matches!(cs.get_ci(0.05), Err(CsError::NoBoundFound(_))));
    }

    #[test]
    fn reset_restores_declared_domain() {
        let mut cs = ConfidenceSequence::new();
        cs.add_obs(1.0, 5.0).unwrap();
        IntervalEstimator::reset(&mut cs);
        assert_eq!(cs.observations(), 0);
        assert_eq!(cs.get_ci(0.05).unwrap(), Domain::unit().as_interval());
    }

    proptest! {
        #[test]
        fn stays_inside_the_unit_domain(
            pairs in prop::collection::vec((0.0f64..3.0, 0.0f64..=1.0), 1..300),
            alpha in 0.001f64..0.5,
        ) {
            let mut cs = ConfidenceSequence::new();
            for (w, r) in pairs {
                cs.add_obs(w, r).unwrap();
                match cs.get_ci(alpha) {
                    Ok(ci) => prop_assert!(0.0 <= ci.lower && ci.lower <= ci.upper && ci.upper <= 1.0),
                    Err(e) => prop_assert!(matches!(e, CsError::NoBoundFound(_))),
                }
            }
        }

        #[test]
        fn smaller_alpha_never_narrows(
            pairs in prop::collection::vec((0.0f64..3.0, 0.0f64..=1.0), 1..200),
        ) {
            let mut cs = ConfidenceSequence::new();
            for (w, r) in pairs {
                cs.add_obs(w, r).unwrap();
                if let (Ok(wide), Ok(narrow)) = (cs.get_ci(0.01), cs.get_ci(0.05)) {
                    prop_assert!(narrow.width() <= wide.width() + 1e-9);
                }
            }
        }
    }
}
