//! Parallel summation of curve radii.
//!
//! The input slice is split into one contiguous chunk per worker. Each
//! worker sums its chunk into a local accumulator and the partial sums are
//! merged once every worker has finished. No accumulator is shared between
//! workers.
//!
//! Floating-point addition is not associative, so the result may differ from
//! [`sum_sequential`] in the last few bits.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;
use tricurve_core::{CurveError, Result};

use crate::curve::Curve;

/// Sums curve radii on a dedicated pool with a fixed number of workers.
pub struct RadiusReducer {
    workers: usize,
    pool: ThreadPool,
}

impl RadiusReducer {
    pub const DEFAULT_WORKERS: usize = 4;
    /// Largest pool this reducer will spawn.
    pub const MAX_WORKERS: usize = 256;

    /// Reject worker counts outside `1..=MAX_WORKERS`.
    pub fn check_workers(workers: usize) -> Result<usize> {
        if (1..=Self::MAX_WORKERS).contains(&workers) {
            Ok(workers)
        } else {
            Err(CurveError::InvalidWorkers {
                workers,
                max: Self::MAX_WORKERS,
            })
        }
    }

    pub fn new(workers: usize) -> Result<Self> {
        let workers = Self::check_workers(workers)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("radius-reducer-{i}"))
            .build()
            .map_err(|e| CurveError::ThreadPool(e.to_string()))?;
        Ok(Self { workers, pool })
    }

    pub fn with_default_workers() -> Result<Self> {
        Self::new(Self::DEFAULT_WORKERS)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Sum of `radius()` over `curves`. An empty slice sums to exactly `0.0`.
    pub fn sum<C: Curve + ?Sized>(&self, curves: &[&C]) -> f64 {
        if curves.is_empty() {
            return 0.0;
        }
        let chunk_len = curves.len().div_ceil(self.workers);
        debug!(
            curves = curves.len(),
            workers = self.workers,
            chunk_len,
            "reducing radii"
        );
        self.pool.install(|| {
            curves
                .par_chunks(chunk_len)
                .map(|chunk| chunk.iter().map(|c| c.radius()).sum::<f64>())
                .sum()
        })
    }
}

impl std::fmt::Debug for RadiusReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadiusReducer")
            .field("workers", &self.workers)
            .finish()
    }
}

/// Left-to-right sum of `radius()` on the calling thread.
pub fn sum_sequential<C: Curve + ?Sized>(curves: &[&C]) -> f64 {
    curves.iter().fold(0.0, |acc, c| acc + c.radius())
}
