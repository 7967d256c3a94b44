use crate::core::Observation;
use std::io::Error;

/// Pull-based source of weighted observations.
///
/// Implementations may be finite (replayed logs) or unbounded generators.
pub trait ObservationStream {
    /// Indicates whether the stream *may* produce more observations.
    ///
    /// If it returns `false`, a subsequent call to [`next_observation`]
    /// must return `None`.
    ///
    /// [`next_observation`]: ObservationStream::next_observation
    fn has_more_observations(&self) -> bool;

    /// Produces the next `(weight, value)` pair, or `None` once exhausted.
    fn next_observation(&mut self) -> Option<Observation>;

    /// Rewinds the stream to its initial state; generators re-seed their RNG.
    fn restart(&mut self) -> Result<(), Error>;
}
