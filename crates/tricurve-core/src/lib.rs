pub mod error;
pub mod traits;

pub use error::{CurveError, Result};
