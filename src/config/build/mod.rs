mod error;
mod sequences;
mod streams;
mod tasks;

pub use error::BuildError;

pub use sequences::build_sequence;
pub use streams::build_stream;
pub use tasks::build_task;
