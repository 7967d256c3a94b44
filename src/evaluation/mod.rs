mod preview;

pub use preview::{BoundSnapshot, BoundTrace};
