use crate::core::{Direction, Domain};
use crate::wealth::memo::WealthMemo;

/// Log-wealth of a one-sided test martingale indexed by a null mean.
///
/// `log_wealth(mu, ..)` is measured in the process's own coordinates: `mu` is
/// the null mean of the non-negative increments, i.e. the distance of the
/// candidate value from the anchored side of [`WealthProcess::domain`] (see
/// [`Direction::offset`]). It must be non-increasing in `mu`.
pub trait WealthProcess {
    /// Number of increments folded in.
    fn steps(&self) -> u64;

    /// Value range the bound is searched in.
    fn domain(&self) -> Domain;

    /// Side of the interval this process bounds.
    fn direction(&self) -> Direction;

    /// Total importance weight folded in. Zero with `steps() > 0` means the
    /// history carries no information about the mean.
    fn weight(&self) -> f64;

    /// Log-wealth at null mean `mu`.
    ///
    /// Implementations may stop accumulating once the value reaches `thres`;
    /// callers must only rely on the sign of `log_wealth - thres`.
    fn log_wealth(&self, mu: f64, thres: f64, memo: &mut WealthMemo) -> f64;
}
