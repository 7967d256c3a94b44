use crate::error::CsError;

/// A single weighted observation `(w, r)` from the stream.
///
/// `weight` is typically an importance weight `pi(a|x) / mu(a|x)` and `value`
/// the reward observed for the logged action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub weight: f64,
    pub value: f64,
}

impl Observation {
    #[inline]
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Rejects weights that are negative or non-finite and values that are
    /// non-finite.
    pub fn validate(&self) -> Result<(), CsError> {
        if !self.weight.is_finite() {
            return Err(CsError::invalid_observation(
                self.weight,
                self.value,
                "weight must be finite",
            ));
        }
        if self.weight < 0.0 {
            return Err(CsError::invalid_observation(
                self.weight,
                self.value,
                "weight must be non-negative",
            ));
        }
        if !self.value.is_finite() {
            return Err(CsError::invalid_observation(
                self.weight,
                self.value,
                "value must be finite",
            ));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Observation {
    fn from((weight, value): (f64, f64)) -> Self {
        Self::new(weight, value)
    }
}
