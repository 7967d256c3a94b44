mod accumulator;
mod direction;
mod interval;
mod observation;

pub use accumulator::{ObservationAccumulator, ScaledStatistics};
pub use direction::Direction;
pub use interval::{ConfidenceInterval, Domain};
pub use observation::Observation;
