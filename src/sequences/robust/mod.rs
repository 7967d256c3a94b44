mod directional_estimator;
mod robust_confidence_sequence;

pub use directional_estimator::DirectionalEstimator;
pub use robust_confidence_sequence::RobustConfidenceSequence;
