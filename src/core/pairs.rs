//! Term co-occurrence pairs and edge weighting
//!
//! Both the live pairs run and the offline derivation go through
//! [`term_pairs`] and [`aggregate`], so the two always agree.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Two distinct terms found on the same object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermPair {
	#[serde(rename = "Source")]
	pub source: String,
	#[serde(rename = "Target")]
	pub target: String,
}

impl TermPair {
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}

	/// Same pair with members in lexicographic order
	pub fn canonical(self) -> Self {
		if self.source <= self.target {
			self
		} else {
			Self {
				source: self.target,
				target: self.source,
			}
		}
	}
}

/// One row of the edge table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
	#[serde(rename = "Source")]
	pub source: String,
	#[serde(rename = "Target")]
	pub target: String,
	#[serde(rename = "Weight")]
	pub weight: u32,
}

/// All unordered pairs of one object's terms, in combination order over
/// the input. Repeated terms count once; fewer than two distinct terms
/// yields nothing.
pub fn term_pairs(terms: &[String]) -> Vec<TermPair> {
	let mut seen = HashSet::new();
	let distinct: Vec<&String> = terms.iter().filter(|t| seen.insert(t.as_str())).collect();

	if distinct.len() < 2 {
		return Vec::new();
	}

	let mut pairs = Vec::with_capacity(distinct.len() * (distinct.len() - 1) / 2);
	for (i, a) in distinct.iter().enumerate() {
		for b in &distinct[i + 1..] {
			pairs.push(TermPair::new(a.as_str(), b.as_str()));
		}
	}
	pairs
}

/// Group pairs by their canonical form and count them.
///
/// Output is sorted by source, then target.
pub fn aggregate<I>(pairs: I) -> Vec<WeightedEdge>
where
	I: IntoIterator<Item = TermPair>,
{
	let mut counts: BTreeMap<(String, String), u32> = BTreeMap::new();
	for pair in pairs {
		let pair = pair.canonical();
		*counts.entry((pair.source, pair.target)).or_insert(0) += 1;
	}

	counts
		.into_iter()
		.map(|((source, target), weight)| WeightedEdge { source, target, weight })
		.collect()
}

/// Pair up and weight a sequence of per-object term lists
pub fn edges_from_term_lists<'a, I>(lists: I) -> Vec<WeightedEdge>
where
	I: IntoIterator<Item = &'a [String]>,
{
	aggregate(lists.into_iter().flat_map(term_pairs))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn terms(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn three_terms_give_three_pairs() {
		let pairs = term_pairs(&terms(&["A", "B", "C"]));
		assert_eq!(
			pairs,
			vec![
				TermPair::new("A", "B"),
				TermPair::new("A", "C"),
				TermPair::new("B", "C"),
			]
		);
	}

	#[test]
	fn pair_order_follows_input_order() {
		let pairs = term_pairs(&terms(&["Lions", "Angels", "Crosses"]));
		assert_eq!(pairs[0], TermPair::new("Lions", "Angels"));
		assert_eq!(pairs[2], TermPair::new("Angels", "Crosses"));
	}

	#[test]
	fn fewer_than_two_terms_give_nothing() {
		assert!(term_pairs(&[]).is_empty());
		assert!(term_pairs(&terms(&["Saints"])).is_empty());
	}

	#[test]
	fn repeated_terms_do_not_self_pair() {
		let pairs = term_pairs(&terms(&["A", "B", "A"]));
		assert_eq!(pairs, vec![TermPair::new("A", "B")]);
		assert!(term_pairs(&terms(&["A", "A"])).is_empty());
	}

	#[test]
	fn aggregation_ignores_member_order() {
		let edges = aggregate(vec![
			TermPair::new("B", "A"),
			TermPair::new("A", "B"),
			TermPair::new("A", "C"),
		]);
		assert_eq!(
			edges,
			vec![
				WeightedEdge { source: "A".into(), target: "B".into(), weight: 2 },
				WeightedEdge { source: "A".into(), target: "C".into(), weight: 1 },
			]
		);
	}

	#[test]
	fn edges_are_sorted_and_weighted_per_object() {
		let objects = [terms(&["Horses", "Men"]), terms(&["Men", "Horses", "Swords"]), terms(&["Flowers"])];
		let edges = edges_from_term_lists(objects.iter().map(|t| t.as_slice()));

		let rows: Vec<(&str, &str, u32)> = edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str(), e.weight))
			.collect();
		assert_eq!(
			rows,
			vec![("Horses", "Men", 2), ("Horses", "Swords", 1), ("Men", "Swords", 1)]
		);
		assert!(edges.iter().all(|e| e.weight >= 1));
	}

	#[test]
	fn empty_input_gives_no_edges() {
		assert!(aggregate(Vec::new()).is_empty());
	}
}
