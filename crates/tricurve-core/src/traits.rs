use crate::error::Result;

/// Validate the parameters of a geometric entity or a run configuration.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
