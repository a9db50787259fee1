//! tricurve driver: builds a random curve collection, reports evaluations,
//! and aggregates the radii of one curve kind.

pub mod config;
pub mod format;
pub mod pipeline;
pub mod source;

pub use config::RunConfig;
pub use pipeline::{run, CurveEvaluation, RunReport};
pub use source::{populate, ParamSource, RandomSource};
