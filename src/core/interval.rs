use crate::error::CsError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Closed range `[lo, hi]` the observed values are assumed to live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    lo: f64,
    hi: f64,
}

impl Domain {
    pub fn new(lo: f64, hi: f64) -> Result<Self, CsError> {
        if !lo.is_finite() {
            return Err(CsError::invalid_argument("lo", lo, "must be finite"));
        }
        if !hi.is_finite() {
            return Err(CsError::invalid_argument("hi", hi, "must be finite"));
        }
        if hi <= lo {
            return Err(CsError::invalid_argument(
                "hi",
                hi,
                "must be strictly greater than lo",
            ));
        }
        Ok(Self { lo, hi })
    }

    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self { lo: 0.0, hi: 1.0 }
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.lo).min(self.hi)
    }

    /// The whole domain as a (trivially valid) confidence interval.
    pub fn as_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval {
            lower: self.lo,
            upper: self.hi,
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::unit()
    }
}

/// Two-sided interval `[lower, upper]` with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Builds an interval from two one-sided bounds. Crossed bounds collapse
    /// to their midpoint.
    pub fn from_bounds(lower: f64, upper: f64) -> Self {
        if lower > upper {
            let mid = 0.5 * (lower + upper);
            Self {
                lower: mid,
                upper: mid,
            }
        } else {
            Self { lower, upper }
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        (ci.lower, ci.upper)
    }
}

impl Display for ConfidenceInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{:.6}, {:.6}]", self.lower, self.upper)
    }
}
