use crate::core::{ConfidenceInterval, Direction, Domain, Observation};
use crate::error::{CsError, check_alpha};
use crate::sequences::IntervalEstimator;
use crate::sequences::robust::DirectionalEstimator;
use crate::solvers::{BoundSolver, BrentOptions};
use tracing::debug;

/// Confidence sequence that stays valid under heavy-tailed importance weights.
///
/// Runs two independent one-sided estimators: `lower` on `w (r - lo)` and
/// `upper` on `w (hi - r)`. Each is a countable mixture of betting
/// martingales over predictably truncated increments, inverted by Brent's
/// method at `alpha / 2`. Any finite value is accepted: on the side it lies
/// beyond, its increment counts as zero.
#[derive(Debug, Clone)]
pub struct RobustConfidenceSequence {
    pub lower: DirectionalEstimator,
    pub upper: DirectionalEstimator,
    domain: Domain,
    solver: BoundSolver,
    sum_wr: f64,
}

impl RobustConfidenceSequence {
    pub fn new() -> Self {
        Self::with_solver(Domain::unit(), BrentOptions::default())
    }

    pub fn with_domain(lo: f64, hi: f64) -> Result<Self, CsError> {
        Ok(Self::with_solver(Domain::new(lo, hi)?, BrentOptions::default()))
    }

    pub fn with_solver(domain: Domain, options: BrentOptions) -> Self {
        Self {
            lower: DirectionalEstimator::new(Direction::Lower, domain),
            upper: DirectionalEstimator::new(Direction::Upper, domain),
            domain,
            solver: BoundSolver::new(options),
            sum_wr: 0.0,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn add_obs(&mut self, weight: f64, value: f64) -> Result<(), CsError> {
        let rejected = |reason| {
            debug!(weight, value, reason, "observation rejected");
            CsError::invalid_observation(weight, value, reason)
        };
        Observation::new(weight, value).validate()?;
        let x_low = self.lower.increment(weight, value);
        let x_high = self.upper.increment(weight, value);
        let wr = weight * value;
        if !(x_low.is_finite() && x_high.is_finite() && wr.is_finite()) {
            return Err(rejected("weighted increment overflows"));
        }

        self.lower.add_increment(weight, x_low);
        self.upper.add_increment(weight, x_high);
        self.sum_wr += wr;
        Ok(())
    }

    pub fn get_ci(&self, alpha: f64) -> Result<ConfidenceInterval, CsError> {
        check_alpha(alpha)?;
        let side = alpha / 2.0;
        let lower = self.lower.bound(&self.solver, side)?;
        let upper = self.upper.bound(&self.solver, side)?;
        Ok(ConfidenceInterval::from_bounds(lower, upper))
    }
}

impl Default for RobustConfidenceSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalEstimator for RobustConfidenceSequence {
    fn add_obs(&mut self, weight: f64, value: f64) -> Result<(), CsError> {
        RobustConfidenceSequence::add_obs(self, weight, value)
    }

    fn get_ci(&self, alpha: f64) -> Result<ConfidenceInterval, CsError> {
        RobustConfidenceSequence::get_ci(self, alpha)
    }

    fn estimate(&self) -> f64 {
        if self.lower.t > 0 {
            self.sum_wr / self.lower.t as f64
        } else {
            f64::NAN
        }
    }

    fn observations(&self) -> u64 {
        self.lower.t
    }

    fn reset(&mut self) {
        let options = *self.solver.options();
        *self = Self::with_solver(self.domain, options);
    }
}
