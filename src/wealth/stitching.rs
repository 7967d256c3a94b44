use crate::core::{Direction, Domain, ScaledStatistics};
use crate::error::CsError;
use crate::utils::math::riemann_zeta;
use crate::wealth::memo::WealthMemo;
use crate::wealth::process::WealthProcess;

pub const DEFAULT_ETA: f64 = 1.1;
pub const DEFAULT_S: f64 = 1.1;

/// Polynomial-stitched empirical-Bernstein boundary.
///
/// For scaled increments in `[0, 1]` with running sum `S_t` and variance
/// proxy `V_t`, the one-sided bound on the mean is
/// `(S_t - sqrt(g1^2 l V + g2^2 l^2) - g2 l) / t` with
/// `l = s ln ln(eta^2 V) + ln(zeta(s) / (alpha ln(eta)^s))`, `V = max(V_t, 1)`.
/// Crossing it has probability at most `alpha` uniformly over `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchedBoundary {
    eta: f64,
    s: f64,
    zeta_s: f64,
    g1: f64,
    g2: f64,
}

impl StitchedBoundary {
    pub fn new(eta: f64, s: f64) -> Result<Self, CsError> {
        if !(eta.is_finite() && eta > 1.0) {
            return Err(CsError::invalid_argument("eta", eta, "must be finite and > 1"));
        }
        if !(s.is_finite() && s > 1.0) {
            return Err(CsError::invalid_argument("s", s, "must be finite and > 1"));
        }
        Ok(Self::from_checked(eta, s))
    }

    fn from_checked(eta: f64, s: f64) -> Self {
        Self {
            eta,
            s,
            zeta_s: riemann_zeta(s),
            g1: (eta.powf(0.25) + eta.powf(-0.25)) / std::f64::consts::SQRT_2,
            g2: (eta.sqrt() + 1.0) / 2.0,
        }
    }

    #[inline]
    pub fn eta(&self) -> f64 {
        self.eta
    }

    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// `l(V, alpha)`: the log-iterated radius term.
    pub fn ell(&self, variance: f64, alpha: f64) -> f64 {
        let v = variance.max(1.0);
        self.s * (self.eta * self.eta * v).ln().ln()
            + (self.zeta_s / (alpha * self.eta.ln().powf(self.s))).ln()
    }

    /// Radius `sqrt(g1^2 l V + g2^2 l^2) + g2 l` around the running sum.
    pub fn radius(&self, variance: f64, alpha: f64) -> f64 {
        let v = variance.max(1.0);
        let ell = self.ell(variance, alpha);
        (self.g1 * self.g1 * ell * v + self.g2 * self.g2 * ell * ell).sqrt() + self.g2 * ell
    }

    /// One-sided lower bound on the mean of the scaled increments, floored
    /// at zero. `t` must be positive.
    pub fn lower_mean_bound(&self, sum: f64, variance: f64, t: u64, alpha: f64) -> f64 {
        ((sum - self.radius(variance, alpha)) / t as f64).max(0.0)
    }
}

impl Default for StitchedBoundary {
    fn default() -> Self {
        Self::from_checked(DEFAULT_ETA, DEFAULT_S)
    }
}

/// One side of the standard sequence seen as a wealth process.
///
/// The stitched boundary has no mixture to evaluate, so the log-wealth is the
/// signed slack `S_t - t m - radius(V_t, e^-thres)` shifted by `thres`, with
/// `m` the null mean in units of the domain width. It decreases in `m` and
/// equals `thres` exactly at the closed-form bound.
#[derive(Debug, Clone, Copy)]
pub struct StitchedProcess {
    direction: Direction,
    domain: Domain,
    steps: u64,
    weight: f64,
    stats: ScaledStatistics,
    boundary: StitchedBoundary,
}

impl StitchedProcess {
    pub fn new(
        direction: Direction,
        domain: Domain,
        steps: u64,
        weight: f64,
        stats: ScaledStatistics,
        boundary: StitchedBoundary,
    ) -> Self {
        Self {
            direction,
            domain,
            steps,
            weight,
            stats,
            boundary,
        }
    }
}

impl WealthProcess for StitchedProcess {
    fn steps(&self) -> u64 {
        self.steps
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn log_wealth(&self, mu: f64, thres: f64, _memo: &mut WealthMemo) -> f64 {
        let m = mu / self.domain.width();
        let radius = self.boundary.radius(self.stats.variance, (-thres).exp());
        thres + (self.stats.sum - self.steps as f64 * m - radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(StitchedBoundary::new(1.0, 1.1).is_err());
        assert!(StitchedBoundary::new(1.1, 1.0).is_err());
        assert!(StitchedBoundary::new(f64::NAN, 1.1).is_err());
        assert_eq!(
            StitchedBoundary::new(DEFAULT_ETA, DEFAULT_S).unwrap(),
            StitchedBoundary::default()
        );
    }

    #[test]
    fn radius_grows_as_alpha_shrinks() {
        let b = StitchedBoundary::default();
        assert!(b.radius(50.0, 0.01) > b.radius(50.0, 0.05));
        assert!(b.radius(500.0, 0.05) > b.radius(50.0, 0.05));
    }

    #[test]
    fn small_variance_is_floored_at_one() {
        let b = StitchedBoundary::default();
        assert_eq!(b.radius(0.0, 0.05), b.radius(1.0, 0.05));
        assert_eq!(b.ell(0.2, 0.05), b.ell(1.0, 0.05));
    }

    #[test]
    fn iterated_log_uses_eta_squared() {
        let b = StitchedBoundary::default();
        let eta = DEFAULT_ETA;
        let tail = (b.zeta_s / (0.05 * eta.ln().powf(DEFAULT_S))).ln();
        let expected = DEFAULT_S * (eta * eta * 40.0_f64).ln().ln() + tail;
        assert!((b.ell(40.0, 0.05) - expected).abs() < 1e-12);
    }

    #[test]
    fn process_crosses_threshold_at_the_closed_form_bound() {
        let b = StitchedBoundary::default();
        let stats = ScaledStatistics {
            sum: 700.0,
            variance: 150.0,
        };
        let domain = Domain::new(0.0, 2.0).unwrap();
        let p = StitchedProcess::new(Direction::Lower, domain, 1_000, 1_000.0, stats, b);
        let thres = -(0.05_f64).ln();
        let m = b.lower_mean_bound(stats.sum, stats.variance, 1_000, 0.05);
        let mut memo = WealthMemo::new();

        assert!((p.log_wealth(m * 2.0, thres, &mut memo) - thres).abs() < 1e-9);
        assert!(p.log_wealth(m, thres, &mut memo) > thres);
        assert!(p.log_wealth(m * 3.0, thres, &mut memo) < thres);
        assert!(memo.is_empty());
    }

    #[test]
    fn lower_bound_is_floored_at_zero() {
        let b = StitchedBoundary::default();
        assert_eq!(b.lower_mean_bound(0.0, 0.0, 10, 0.05), 0.0);
        let lb = b.lower_mean_bound(9000.0, 100.0, 10_000, 0.05);
        assert!(lb > 0.85 && lb < 0.9);
    }
}
