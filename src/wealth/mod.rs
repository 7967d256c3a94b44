pub mod g_tilde;
pub mod memo;
pub mod mixture;
mod process;
pub mod stitching;

pub use g_tilde::GTilde;
pub use memo::WealthMemo;
pub use process::WealthProcess;
pub use stitching::{StitchedBoundary, StitchedProcess};
