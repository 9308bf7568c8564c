//! Raw term dump loading and offline pair derivation

use std::fs;
use std::path::Path;

use crate::core::{edges_from_term_lists, Result, TermMap, WeightedEdge};

/// Read a dump written by a raw term run
pub fn load_raw(path: &Path) -> Result<TermMap> {
	let content = fs::read_to_string(path)?;
	Ok(serde_json::from_str(&content)?)
}

/// Weighted edges of a persisted term map. No network access.
pub fn derive_pairs_from_raw(raw: &TermMap) -> Vec<WeightedEdge> {
	edges_from_term_lists(raw.term_lists())
}
