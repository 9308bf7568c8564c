//! Result persistence

pub mod paths;
pub mod raw;
pub mod sink;

pub use paths::validate_paths;
pub use raw::{derive_pairs_from_raw, load_raw};
pub use sink::{aggregate_and_save, save_edges, save_json, save_report, Report};
