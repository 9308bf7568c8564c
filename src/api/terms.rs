//! Per-object tag terms

use serde::Deserialize;
use serde_json::Value;

use super::ApiClient;
use crate::core::{term_pairs, ObjectId, Result, TagnetError, TermPair};

#[derive(Deserialize)]
struct ObjectRecord {
	tags: Vec<Tag>,
}

#[derive(Deserialize)]
struct Tag {
	term: String,
}

/// Anything that can look up an object's tag terms
pub trait TermSource {
	/// Raw terms in received order
	fn fetch_terms(&self, id: &ObjectId) -> Result<Vec<String>>;

	/// Every unordered pair of the object's distinct terms
	fn get_pairs(&self, id: &ObjectId) -> Result<Vec<TermPair>> {
		Ok(term_pairs(&self.fetch_terms(id)?))
	}
}

/// Validate an object body against `{ tags: [{ term }] }`
pub fn parse_terms(data: Value) -> Result<Vec<String>> {
	let record: ObjectRecord =
		serde_json::from_value(data).map_err(|e| TagnetError::Schema(e.to_string()))?;
	Ok(record.tags.into_iter().map(|tag| tag.term).collect())
}

/// The per-object endpoint of a collection API
pub struct ObjectApi<'a> {
	client: &'a ApiClient,
	base: String,
}

impl<'a> ObjectApi<'a> {
	pub fn new(client: &'a ApiClient, base_endpoint: &str) -> Self {
		Self {
			client,
			base: base_endpoint.trim_end_matches('/').to_string(),
		}
	}

	pub fn object_url(&self, id: &ObjectId) -> String {
		format!("{}/{}", self.base, id)
	}
}

impl TermSource for ObjectApi<'_> {
	fn fetch_terms(&self, id: &ObjectId) -> Result<Vec<String>> {
		let data = self.client.get_api_data(&self.object_url(id), &[])?;
		parse_terms(data)
	}
}
