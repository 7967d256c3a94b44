use crate::core::ConfidenceInterval;
use crate::error::CsError;

/// Streaming estimator of a mean with anytime-valid confidence intervals.
///
/// Implementations are single-writer: [`add_obs`](Self::add_obs) takes
/// `&mut self`. [`get_ci`](Self::get_ci) takes `&self` and never changes the
/// reported state, though it may fill an internal cache.
pub trait IntervalEstimator {
    /// Incorporates one weighted observation.
    ///
    /// A rejected observation leaves the estimator untouched.
    fn add_obs(&mut self, weight: f64, value: f64) -> Result<(), CsError>;

    /// Interval covering the mean at every observation count simultaneously
    /// with probability at least `1 - alpha`.
    fn get_ci(&self, alpha: f64) -> Result<ConfidenceInterval, CsError>;

    /// Current point estimate of the mean, NaN while empty.
    fn estimate(&self) -> f64;

    /// Number of accepted observations.
    fn observations(&self) -> u64;

    /// Forgets every observation.
    fn reset(&mut self);
}
