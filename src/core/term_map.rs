//! Object id to raw term list mapping, in insertion order

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use super::ObjectId;

/// Raw-mode result: each successful object's terms, in the order fetched.
///
/// Serializes as a JSON object keyed by object id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermMap {
	entries: Vec<(ObjectId, Vec<String>)>,
	index: HashMap<ObjectId, usize>,
}

impl TermMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, id: ObjectId, terms: Vec<String>) {
		match self.index.get(&id) {
			Some(&pos) => self.entries[pos].1 = terms,
			None => {
				self.index.insert(id.clone(), self.entries.len());
				self.entries.push((id, terms));
			}
		}
	}

	pub fn get(&self, id: &ObjectId) -> Option<&[String]> {
		self.index.get(id).map(|&pos| self.entries[pos].1.as_slice())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all term list lengths
	pub fn term_count(&self) -> usize {
		self.entries.iter().map(|(_, terms)| terms.len()).sum()
	}

	pub fn term_lists(&self) -> impl Iterator<Item = &[String]> {
		self.entries.iter().map(|(_, terms)| terms.as_slice())
	}
}

impl Serialize for TermMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (id, terms) in &self.entries {
			map.serialize_entry(id, terms)?;
		}
		map.end()
	}
}

struct TermMapVisitor;

impl<'de> Visitor<'de> for TermMapVisitor {
	type Value = TermMap;

	fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str("a map of object ids to term lists")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TermMap, A::Error> {
		let mut map = TermMap::new();
		while let Some((id, terms)) = access.next_entry::<ObjectId, Vec<String>>()? {
			map.insert(id, terms);
		}
		Ok(map)
	}
}

impl<'de> Deserialize<'de> for TermMap {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(TermMapVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_insertion_order_through_json() {
		let mut map = TermMap::new();
		map.insert(ObjectId::from(90), vec!["Men".into(), "Horses".into()]);
		map.insert(ObjectId::from(3), vec!["Crosses".into()]);

		let json = serde_json::to_string(&map).unwrap();
		assert_eq!(json, r#"{"90":["Men","Horses"],"3":["Crosses"]}"#);

		let back: TermMap = serde_json::from_str(&json).unwrap();
		assert_eq!(back, map);
	}

	#[test]
	fn counts_terms() {
		let mut map = TermMap::new();
		map.insert(ObjectId::from(1), vec!["A".into(), "B".into()]);
		map.insert(ObjectId::from(2), vec!["C".into()]);
		assert_eq!(map.len(), 2);
		assert_eq!(map.term_count(), 3);
		assert_eq!(map.get(&ObjectId::from(2)), Some(&["C".to_string()][..]));
	}
}
