use crate::error::CsError;
use tracing::trace;

/// Stopping rule for [`brentq`].
///
/// Iteration stops once the bracket half-width falls below
/// `(xtol + rtol * |x|) / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentOptions {
    pub xtol: f64,
    pub rtol: f64,
    pub max_iter: usize,
}

impl Default for BrentOptions {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iter: 100,
        }
    }
}

fn evaluate<F: FnMut(f64) -> f64>(f: &mut F, x: f64) -> Result<f64, CsError> {
    let fx = f(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(CsError::NoBoundFound(format!(
            "objective is not finite at x={x}"
        )))
    }
}

/// Finds a root of `f` in `[xa, xb]` by Brent's method.
///
/// Combines bisection, secant and inverse quadratic interpolation, keeping
/// the root bracketed at every step. `f(xa)` and `f(xb)` must have opposite
/// signs (or one of them be zero).
///
/// # Errors
/// [`CsError::NoBoundFound`] if the bracket has no sign change, an evaluation
/// is not finite, or the iteration budget is exhausted.
pub fn brentq<F: FnMut(f64) -> f64>(
    mut f: F,
    xa: f64,
    xb: f64,
    opts: &BrentOptions,
) -> Result<f64, CsError> {
    let mut xpre = xa;
    let mut xcur = xb;
    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    let mut fpre = evaluate(&mut f, xpre)?;
    let mut fcur = evaluate(&mut f, xcur)?;
    if fpre * fcur > 0.0 {
        return Err(CsError::NoBoundFound(format!(
            "bracket [{xa}, {xb}] has no sign change (f={fpre}, {fcur})"
        )));
    }
    if fpre == 0.0 {
        return Ok(xpre);
    }
    if fcur == 0.0 {
        return Ok(xcur);
    }

    for iter in 0..opts.max_iter {
        if fpre != 0.0 && fcur != 0.0 && fpre.signum() != fcur.signum() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (opts.xtol + opts.rtol * xcur.abs()) / 2.0;
        let sbis = (xblk - xcur) / 2.0;
        if fcur == 0.0 || sbis.abs() < delta {
            trace!(iter, root = xcur, "brentq converged");
            return Ok(xcur);
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else if sbis > 0.0 {
            xcur += delta;
        } else {
            xcur -= delta;
        }
        fcur = evaluate(&mut f, xcur)?;
    }

    Err(CsError::NoBoundFound(format!(
        "brentq did not converge within {} iterations",
        opts.max_iter
    )))
}
