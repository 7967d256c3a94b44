use thiserror::Error;

/// Failures surfaced by the confidence-sequence estimators.
///
/// Every variant is local and synchronous: the operation that returns it has
/// left the estimator exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsError {
    /// The observation was rejected before touching any running statistic.
    #[error("invalid observation (weight={weight}, value={value}): {reason}")]
    InvalidObservation {
        weight: f64,
        value: f64,
        reason: &'static str,
    },

    /// A query or construction parameter is outside its admissible range.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The root-finder could not produce a bound from the current state.
    #[error("no bound found: {0}")]
    NoBoundFound(String),
}

impl CsError {
    pub(crate) fn invalid_observation(weight: f64, value: f64, reason: &'static str) -> Self {
        CsError::InvalidObservation {
            weight,
            value,
            reason,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, value: f64, reason: &'static str) -> Self {
        CsError::InvalidArgument {
            name,
            value,
            reason,
        }
    }
}

/// Checks that a miscoverage level lies in the open interval `(0, 1)`.
pub fn check_alpha(alpha: f64) -> Result<(), CsError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(CsError::invalid_argument(
            "alpha",
            alpha,
            "must lie in the open interval (0, 1)",
        ))
    }
}
