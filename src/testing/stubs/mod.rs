pub mod stalled_estimator;
pub mod vec_stream;

pub use stalled_estimator::StalledEstimator;
pub use vec_stream::VecObservationStream;
