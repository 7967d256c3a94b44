mod bound_trace;
mod snapshot;

pub use bound_trace::BoundTrace;
pub use snapshot::BoundSnapshot;
