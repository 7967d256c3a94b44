use crate::config::build::BuildError;
use crate::config::choices::{RobustParameters, SequenceChoice, StandardParameters};
use crate::core::Domain;
use crate::sequences::{ConfidenceSequence, IntervalEstimator, RobustConfidenceSequence};
use crate::solvers::BrentOptions;
use crate::wealth::StitchedBoundary;

impl TryFrom<StandardParameters> for ConfidenceSequence {
    type Error = BuildError;

    fn try_from(p: StandardParameters) -> Result<Self, Self::Error> {
        let domain = Domain::new(p.lower, p.upper)?;
        let boundary = StitchedBoundary::new(p.eta, p.s)?;
        Ok(ConfidenceSequence::with_boundary(domain, boundary))
    }
}

impl TryFrom<RobustParameters> for RobustConfidenceSequence {
    type Error = BuildError;

    fn try_from(p: RobustParameters) -> Result<Self, Self::Error> {
        if !(p.xtol.is_finite() && p.xtol > 0.0) {
            return Err(BuildError::InvalidParameter("xtol must be > 0".into()));
        }
        if p.max_iterations == 0 {
            return Err(BuildError::InvalidParameter(
                "max_iterations must be >= 1".into(),
            ));
        }
        let domain = Domain::new(p.lower, p.upper)?;
        let options = BrentOptions {
            xtol: p.xtol,
            max_iter: p.max_iterations,
            ..BrentOptions::default()
        };
        Ok(RobustConfidenceSequence::with_solver(domain, options))
    }
}

pub fn build_sequence(choice: SequenceChoice) -> Result<Box<dyn IntervalEstimator>, BuildError> {
    match choice {
        SequenceChoice::Standard(p) => {
            let cs = ConfidenceSequence::try_from(p)?;
            Ok(Box::new(cs))
        }
        SequenceChoice::Robust(p) => {
            let cs = RobustConfidenceSequence::try_from(p)?;
            Ok(Box::new(cs))
        }
    }
}
