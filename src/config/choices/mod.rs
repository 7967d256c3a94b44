mod choice;
mod sequence_choice;
mod stream_choice;
mod task_choice;

pub use choice::Choice;
pub use sequence_choice::*;
pub use stream_choice::*;
pub use task_choice::*;
