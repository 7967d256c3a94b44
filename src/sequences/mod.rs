mod confidence_sequence;
mod interval_estimator;
pub mod robust;

pub use confidence_sequence::ConfidenceSequence;
pub use interval_estimator::IntervalEstimator;
pub use robust::{DirectionalEstimator, RobustConfidenceSequence};
