//! Collection object identifiers

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque object identifier as sent by the collection listing.
///
/// The upstream sends integers, but the id is only ever used as a path
/// segment and a dump key, so it is held as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for ObjectId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u64> for ObjectId {
	fn from(id: u64) -> Self {
		Self(id.to_string())
	}
}

impl From<&str> for ObjectId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl Serialize for ObjectId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Int(u64),
	Text(String),
}

impl<'de> Deserialize<'de> for ObjectId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match RawId::deserialize(deserializer)? {
			RawId::Int(n) => Self::from(n),
			RawId::Text(s) => Self(s),
		})
	}
}
