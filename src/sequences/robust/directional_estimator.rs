use crate::core::{Direction, Domain};
use crate::error::CsError;
use crate::solvers::{BoundSolver, BrentOptions, brentq};
use crate::wealth::{GTilde, WealthMemo, WealthProcess, mixture};
use std::cell::{RefCell, RefMut};

/// One side of a robust confidence sequence.
///
/// Folds in the increments `w (r - lo)` (lower side) or `w (hi - r)` (upper
/// side), clamped at zero, through a [`GTilde`] truncation and exposes the
/// mixture log-wealth of the null "increment mean equals `mu`".
///
/// `t` and `gtilde` are public so a saved state can be restored or inspected
/// without replaying the stream. The penalty memo lives behind a `RefCell`
/// so bound queries can fill it through `&self`; every added increment
/// clears it.
#[derive(Debug, Clone)]
pub struct DirectionalEstimator {
    /// Number of increments folded in.
    pub t: u64,
    /// Truncation state and histogram of the increments.
    pub gtilde: GTilde,
    direction: Direction,
    domain: Domain,
    sum_weights: f64,
    memo: RefCell<WealthMemo>,
}

impl DirectionalEstimator {
    pub fn new(direction: Direction, domain: Domain) -> Self {
        Self {
            t: 0,
            gtilde: GTilde::new(domain.width()),
            direction,
            domain,
            sum_weights: 0.0,
            memo: RefCell::new(WealthMemo::new()),
        }
    }

    /// Raw increment contributed by `(weight, value)` on this side. Negative
    /// for values beyond this side's anchor.
    #[inline]
    pub fn increment(&self, weight: f64, value: f64) -> f64 {
        weight * self.direction.offset(self.domain, value)
    }

    /// Folds in an already validated increment carrying `weight`. Negative
    /// increments count as zero.
    pub fn add_increment(&mut self, weight: f64, x: f64) {
        self.memo.get_mut().clear();
        self.gtilde.add(x.max(0.0));
        self.t += 1;
        self.sum_weights += weight;
    }

    pub fn ingest(&mut self, weight: f64, value: f64) {
        let x = self.increment(weight, value);
        self.add_increment(weight, x);
    }

    /// Sum of truncated increments, the `s` fed to [`Self::log_wealth_mix`].
    #[inline]
    pub fn statistic(&self) -> f64 {
        self.gtilde.sum()
    }

    /// The penalty memo owned by this side.
    pub fn memo(&self) -> RefMut<'_, WealthMemo> {
        self.memo.borrow_mut()
    }

    /// Mixture log-wealth at null mean `mu` given the increment sum `s`.
    ///
    /// Stops early once `thres` is reached. Penalties already in `memo` are
    /// used as-is, so a memo saved alongside `t` restores the exact state.
    pub fn log_wealth_mix(&self, mu: f64, s: f64, thres: f64, memo: &mut WealthMemo) -> f64 {
        mixture::log_wealth_mix(
            &self.gtilde,
            self.t,
            self.domain.width(),
            mu,
            s,
            thres,
            memo,
        )
    }

    /// Root of `log_wealth_mix(mu) - thres` over `[min_mu, max_mu]`.
    pub fn root_brentq(
        &self,
        s: f64,
        thres: f64,
        memo: &mut WealthMemo,
        min_mu: f64,
        max_mu: f64,
    ) -> Result<f64, CsError> {
        brentq(
            |mu| self.log_wealth_mix(mu, s, thres, memo) - thres,
            min_mu,
            max_mu,
            &BrentOptions::default(),
        )
    }

    /// One-sided bound at level `alpha`, reusing this side's memo.
    pub fn bound(&self, solver: &BoundSolver, alpha: f64) -> Result<f64, CsError> {
        solver.solve(self, alpha, &mut self.memo())
    }
}

impl WealthProcess for DirectionalEstimator {
    fn steps(&self) -> u64 {
        self.t
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn weight(&self) -> f64 {
        self.sum_weights
    }

    fn log_wealth(&self, mu: f64, thres: f64, memo: &mut WealthMemo) -> f64 {
        self.log_wealth_mix(mu, self.statistic(), thres, memo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{
        CHECKPOINT_PAIRS, CHECKPOINT_ROOT, CHECKPOINT_STATISTIC, CHECKPOINT_STEPS,
    };

    fn checkpoint_source() -> DirectionalEstimator {
        let mut est = DirectionalEstimator::new(Direction::Lower, Domain::unit());
        for i in 0..CHECKPOINT_STEPS {
            let (w, r) = CHECKPOINT_PAIRS[i as usize % CHECKPOINT_PAIRS.len()];
            est.ingest(w, r);
        }
        est
    }

    #[test]
    fn increments_measure_distance_from_the_anchor() {
        let d = Domain::new(-1.0, 3.0).unwrap();
        let lower = DirectionalEstimator::new(Direction::Lower, d);
        let upper = DirectionalEstimator::new(Direction::Upper, d);
        assert_eq!(lower.increment(2.0, 0.0), 2.0);
        assert_eq!(upper.increment(2.0, 0.0), 6.0);
        assert_eq!(upper.increment(1.0, 4.0), -1.0);
    }

    #[test]
    fn values_past_the_anchor_count_as_zero() {
        let mut est = DirectionalEstimator::new(Direction::Lower, Domain::unit());
        est.ingest(1.0, -2.0);
        assert_eq!(est.t, 1);
        assert_eq!(est.statistic(), 0.0);
        assert_eq!(est.weight(), 1.0);
    }

    #[test]
    fn counters_advance_together() {
        let est = checkpoint_source();
        assert_eq!(est.t, 88);
        assert_eq!(est.gtilde.t, 88);
        // The first increment of 2.0 is truncated to the opening level.
        assert!((est.statistic() - 75.99141).abs() < 1e-9);
        assert_eq!(est.weight(), 88.0);
    }

    #[test]
    fn restored_state_converges_to_the_saved_root() {
        let source = checkpoint_source();
        let mut memo = WealthMemo::new();
        source.log_wealth_mix(0.0, source.statistic(), f64::INFINITY, &mut memo);
        assert_eq!(memo.len(), mixture::MAX_COMPONENTS);

        let mut restored = DirectionalEstimator::new(Direction::Lower, Domain::unit());
        restored.t = 88;
        restored.gtilde.t = 88;
        assert_eq!(restored.t, 88);
        assert_eq!(restored.gtilde.t, 88);

        let thres = 40.0_f64.ln();
        let root = restored
            .root_brentq(CHECKPOINT_STATISTIC, thres, &mut memo, 0.0, 1.0)
            .unwrap();
        assert!((root - CHECKPOINT_ROOT).abs() < 1e-6);
    }

    #[test]
    fn adding_an_increment_clears_the_owned_memo() {
        let mut est = checkpoint_source();
        let before = est.log_wealth(0.3, f64::INFINITY, &mut est.memo());
        assert_eq!(est.memo().len(), mixture::MAX_COMPONENTS);

        est.ingest(1.0, 1.0);
        assert!(est.memo().is_empty());

        let reused = est.log_wealth(0.3, f64::INFINITY, &mut est.memo());
        let fresh = est.log_wealth(0.3, f64::INFINITY, &mut WealthMemo::new());
        assert_eq!(reused, fresh);
        assert_ne!(reused, before);
    }

    #[test]
    fn solver_bound_matches_direct_root() {
        let est = checkpoint_source();
        let alpha = 0.025_f64;
        let thres = -alpha.ln();
        let direct = est
            .root_brentq(est.statistic(), thres, &mut WealthMemo::new(), 0.0, 1.0)
            .unwrap();
        let bound = est.bound(&BoundSolver::default(), alpha).unwrap();
        assert!((bound - direct).abs() < 1e-10);
        assert!(!est.memo().is_empty());
    }
}
