use crate::error::{CsError, check_alpha};
use crate::solvers::brent::{BrentOptions, brentq};
use crate::wealth::{WealthMemo, WealthProcess};
use tracing::{debug, trace};

/// Inverts a [`WealthProcess`] at the threshold `ln(1 / alpha)`.
///
/// The bound is the value, in the process domain, where the log-wealth of the
/// null "mean equals value" crosses the threshold. Values on the near side of
/// it are rejected at level `alpha`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundSolver {
    options: BrentOptions,
}

impl BoundSolver {
    pub fn new(options: BrentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BrentOptions {
        &self.options
    }

    /// One-sided bound of `process` at level `alpha`.
    ///
    /// Returns the domain edge when no data has been seen or when even the
    /// edge is not rejected. `memo` is handed to every log-wealth evaluation
    /// and must belong to `process` in its current state.
    ///
    /// # Errors
    /// - [`CsError::InvalidArgument`] if `alpha` is outside `(0, 1)`.
    /// - [`CsError::NoBoundFound`] if every observation had zero weight, the
    ///   far edge is still rejected, an evaluation is not a number, or
    ///   Brent's method fails.
    pub fn solve<P: WealthProcess + ?Sized>(
        &self,
        process: &P,
        alpha: f64,
        memo: &mut WealthMemo,
    ) -> Result<f64, CsError> {
        check_alpha(alpha)?;
        let domain = process.domain();
        let direction = process.direction();
        if process.steps() == 0 {
            return Ok(direction.edge(domain));
        }
        if process.weight() == 0.0 {
            debug!(%direction, steps = process.steps(), "all observations have zero weight");
            return Err(CsError::NoBoundFound(format!(
                "{direction} process has {} observations and zero total weight",
                process.steps()
            )));
        }

        let thres = -alpha.ln();
        let mut excess =
            |m: f64| process.log_wealth(direction.offset(domain, m), thres, memo) - thres;

        let near = direction.edge(domain);
        let f_near = excess(near);
        if f_near.is_nan() {
            return Err(CsError::NoBoundFound(format!(
                "{direction} log-wealth is not a number at {near}"
            )));
        }
        if f_near < 0.0 {
            trace!(%direction, bound = near, "domain edge not rejected");
            return Ok(near);
        }

        let far = direction.far_edge(domain);
        let f_far = excess(far);
        if f_far.is_nan() || f_far >= 0.0 {
            debug!(
                %direction,
                steps = process.steps(),
                f_far,
                "every value in the domain is rejected"
            );
            return Err(CsError::NoBoundFound(format!(
                "{direction} process rejects the whole domain [{}, {}]",
                domain.lo(),
                domain.hi()
            )));
        }

        brentq(&mut excess, domain.lo(), domain.hi(), &self.options).inspect_err(|e| {
            debug!(%direction, steps = process.steps(), error = %e, "root-finding failed");
        })
    }
}
