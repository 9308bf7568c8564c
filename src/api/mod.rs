//! Collection API access
//!
//! A blocking JSON client, a sliding-window rate limiter, and the two
//! upstream calls: list object ids, fetch one object's tag terms.

pub mod client;
pub mod collection;
pub mod rate_limit;
pub mod terms;

pub use client::ApiClient;
pub use collection::get_object_ids;
pub use rate_limit::RateLimiter;
pub use terms::{parse_terms, ObjectApi, TermSource};
