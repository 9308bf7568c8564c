//! # Command Implementations
//!
//! `collect` backs both the raw and pairs commands; `derive` replays pair
//! aggregation over a saved raw dump.

pub mod collect;
pub mod derive;
