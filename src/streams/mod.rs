pub mod generators;
pub mod stream;

pub use generators::OffPolicyGenerator;
pub use stream::ObservationStream;
