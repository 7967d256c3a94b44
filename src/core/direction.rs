use crate::core::interval::Domain;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Side of the interval a one-sided process bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Lower,
    Upper,
}

impl Direction {
    /// Distance of `x` from this side's anchor: `x - lo` for the lower side,
    /// `hi - x` for the upper side. Values and null means both map into the
    /// non-negative coordinates a one-sided process works in.
    #[inline]
    pub fn offset(self, domain: Domain, x: f64) -> f64 {
        match self {
            Direction::Lower => x - domain.lo(),
            Direction::Upper => domain.hi() - x,
        }
    }

    /// A-priori bound before any data: the domain endpoint on this side.
    #[inline]
    pub fn edge(self, domain: Domain) -> f64 {
        match self {
            Direction::Lower => domain.lo(),
            Direction::Upper => domain.hi(),
        }
    }

    /// The endpoint opposite to [`Direction::edge`].
    #[inline]
    pub fn far_edge(self, domain: Domain) -> f64 {
        match self {
            Direction::Lower => domain.hi(),
            Direction::Upper => domain.lo(),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Direction::Lower => write!(f, "lower"),
            Direction::Upper => write!(f, "upper"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_mirror_images() {
        let d = Domain::new(-1.0, 3.0).unwrap();
        assert_eq!(Direction::Lower.offset(d, 0.0), 1.0);
        assert_eq!(Direction::Upper.offset(d, 0.0), 3.0);
        assert_eq!(Direction::Lower.offset(d, d.lo()), 0.0);
        assert_eq!(Direction::Upper.offset(d, d.hi()), 0.0);
    }

    #[test]
    fn edges() {
        let d = Domain::unit();
        assert_eq!(Direction::Lower.edge(d), 0.0);
        assert_eq!(Direction::Upper.edge(d), 1.0);
        assert_eq!(Direction::Lower.far_edge(d), 1.0);
        assert_eq!(Direction::Upper.to_string(), "upper");
    }
}
