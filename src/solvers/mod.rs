mod bound_solver;
mod brent;

pub use bound_solver::BoundSolver;
pub use brent::{BrentOptions, brentq};
