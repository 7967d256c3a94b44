//! Countable mixture of betting martingales over a geometric grid of bet
//! sizes.
//!
//! Component `j` bets with scale `nu_j = TOP_BET_SCALE XI^-j / width` and
//! prior weight `(1 - 1/XI) XI^-j`. Against the null
//! "mean equals `mu`" it uses `lambda = nu / (1 + nu mu)`, which factorises
//! each wealth factor as `(1 + nu x) / (1 + nu mu)`. Writing
//! `ln(1 + y) = y - phi(y)` gives the lower bound
//!
//! ```text
//! ln W_j(mu) >= nu_j s - v_j - t ln(1 + nu_j mu)
//! ```
//!
//! where `s` is the sum of truncated increments and `v_j` the histogram bound
//! on `sum phi(nu_j x)`. Only `v_j` depends on the full history, so it is
//! what the memo caches.

use crate::utils::math::log_add_exp;
use crate::wealth::g_tilde::GTilde;
use crate::wealth::memo::WealthMemo;

/// Geometric spacing between consecutive bet scales.
pub const XI: f64 = 1.6;

/// Bet scale of the first component, in units of `1 / width`.
pub const TOP_BET_SCALE: f64 = 1.96542;

/// Number of mixture components.
pub const MAX_COMPONENTS: usize = 64;

/// `phi(y) = y - ln(1 + y)`, convex and non-negative on `y >= 0`.
#[inline]
pub fn phi(y: f64) -> f64 {
    y - y.ln_1p()
}

/// Log prior weight `ln((1 - 1/XI) XI^-j)`. The weights sum to one.
#[inline]
pub fn log_prior(component: usize) -> f64 {
    (1.0 - 1.0 / XI).ln() - component as f64 * XI.ln()
}

/// Bet scale of component `j` for increments measured against `width`.
#[inline]
pub fn bet_scale(component: usize, width: f64) -> f64 {
    TOP_BET_SCALE * XI.powf(-(component as f64)) / width
}

/// Lower bound on the log-wealth of the mixture at null mean `mu`.
///
/// Components are folded in order with a stable log-add-exp; once the running
/// total reaches `thres` the remaining (non-negative) contributions cannot
/// change the sign of `value - thres`, so evaluation stops early. `memo` must
/// have been filled, if at all, from this same `gtilde`.
pub fn log_wealth_mix(
    gtilde: &GTilde,
    t: u64,
    width: f64,
    mu: f64,
    s: f64,
    thres: f64,
    memo: &mut WealthMemo,
) -> f64 {
    let steps = t as f64;
    let mut acc = f64::NEG_INFINITY;
    for j in 0..MAX_COMPONENTS {
        let nu = bet_scale(j, width);
        let penalty = memo.get_or_insert_with(j, || gtilde.penalty(nu));
        let term = log_prior(j) + nu * s - penalty - steps * (nu * mu).ln_1p();
        acc = log_add_exp(acc, term);
        if acc >= thres {
            break;
        }
    }
    acc
}
