//! Anytime-valid confidence sequences for streaming importance-weighted means.
//!
//! Two estimators share the [`IntervalEstimator`] interface:
//! [`ConfidenceSequence`] for bounded values and [`RobustConfidenceSequence`]
//! for heavy-tailed importance weights. Intervals returned at every step hold
//! simultaneously with probability at least `1 - alpha`.

pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod sequences;
pub mod solvers;
pub mod streams;
pub mod tasks;
pub mod utils;
pub mod wealth;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{ConfidenceInterval, Domain, Observation};
pub use error::CsError;
pub use sequences::{ConfidenceSequence, IntervalEstimator, RobustConfidenceSequence};
