//! # User Interface
//!
//! Colored, timestamped terminal output.

pub mod log;

pub use log::{debug, error, header, info, queue, success, summary, warn, Log};
