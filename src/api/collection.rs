//! Collection listing

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

use super::ApiClient;
use crate::core::{ObjectId, Result, TagnetError};
use crate::ui;

#[derive(Deserialize)]
struct ObjectList {
	#[serde(rename = "objectIDs", default)]
	object_ids: Option<Vec<ObjectId>>,
}

/// Ids listed by the collection endpoint, truncated to the first `limit`.
///
/// A missing or `null` id list means an empty collection. Repeated ids are
/// dropped after their first occurrence, and a `limit` of 0 means no cap.
pub fn get_object_ids(
	client: &ApiClient,
	endpoint: &str,
	params: &[(String, String)],
	limit: Option<usize>,
) -> Result<Vec<ObjectId>> {
	let data = client.get_api_data(endpoint, params)?;
	parse_object_ids(data, limit)
}

pub(crate) fn parse_object_ids(data: Value, limit: Option<usize>) -> Result<Vec<ObjectId>> {
	let list: ObjectList = serde_json::from_value(data)
		.map_err(|e| TagnetError::Schema(format!("objectIDs: {}", e)))?;

	let mut ids = list.object_ids.unwrap_or_default();
	let repeated = drop_repeats(&mut ids);
	if repeated > 0 {
		ui::warn(&format!("Collection lists {} repeated object id(s), fetching each once", repeated));
	}
	if let Some(limit) = limit.filter(|&n| n > 0) {
		ids.truncate(limit);
	}
	Ok(ids)
}

/// Keep the first occurrence of every id; returns how many were dropped.
fn drop_repeats(ids: &mut Vec<ObjectId>) -> usize {
	let before = ids.len();
	let mut seen = HashSet::with_capacity(before);
	ids.retain(|id| seen.insert(id.clone()));
	before - ids.len()
}
