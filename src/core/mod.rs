//! Core domain types

pub mod error;
pub mod object;
pub mod pairs;
pub mod term_map;

pub use error::{FetchFailure, Result, TagnetError};
pub use object::ObjectId;
pub use pairs::{aggregate, edges_from_term_lists, term_pairs, TermPair, WeightedEdge};
pub use term_map::TermMap;
