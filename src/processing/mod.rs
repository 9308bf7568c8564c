//! Batch processing of collection objects

pub mod batch;

pub use batch::{run_batch, BatchOutcome, BatchResult};
