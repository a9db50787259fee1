use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Invalid parameter `{name}`: {value} (must be finite and positive)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid worker count: {workers} (must be between 1 and {max})")]
    InvalidWorkers { workers: usize, max: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;

/// Reject parameters that are not finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::InvalidParameter { name, value })
    }
}
